//! Default terminal views, emitted through the template engine.

use std::io;

use peephole_template::{Funcmap, Template};
use peephole_types::{
    impl_inspect_struct, Field, Inspect, Literal, RenderError, RequestContext,
};

use crate::path::subpath;
use crate::summary::summary;

const STRUCT_TEMPLATE: &str = r"
<div>
<p>struct {{ .type_name }} {</p>
{{ fields }}
<p>}</p>
</div>
";

const FIELD_TEMPLATE: &str = r"
<div>
<p>{{ .name }} {{ .type_name }} : {{ summary }}</p>
</div>
";

const COLLECTION_TEMPLATE: &str = r"
<div>
<p>{{ .type_name }} ({{ .len }} elements)</p>
{{ items }}
</div>
";

const ITEM_TEMPLATE: &str = r"
<p>{{ .index }}: {{ summary }}</p>
";

const SCALAR_TEMPLATE: &str = r"
<div>
<p>{{ .literal }} {{ .type_name }}</p>
</div>
";

struct StructHeading {
    type_name: String,
}

impl_inspect_struct!(StructHeading { type_name });

struct FieldRow {
    name: String,
    type_name: String,
}

impl_inspect_struct!(FieldRow { name, type_name });

struct CollectionHeading {
    type_name: String,
    len: usize,
}

impl_inspect_struct!(CollectionHeading { type_name, len });

struct ItemRow {
    index: usize,
}

impl_inspect_struct!(ItemRow { index });

struct ScalarRow {
    literal: String,
    type_name: String,
}

impl_inspect_struct!(ScalarRow { literal, type_name });

/// Every field in declaration order: name, type, and a summary linking
/// to the field's path.
pub(crate) fn struct_view(
    value: &dyn Inspect,
    fields: &[Field<'_>],
    prefix: &str,
    ctx: &RequestContext,
    out: &mut dyn io::Write,
) -> Result<(), RenderError> {
    let heading = StructHeading {
        type_name: value.type_name(),
    };
    let row_template = Template::parse(FIELD_TEMPLATE);
    let funcs = Funcmap::new().with_fn("fields", |out| {
        for field in fields {
            let row = FieldRow {
                name: field.name.to_string(),
                type_name: field.value.type_name(),
            };
            let link = subpath(prefix, &field.name);
            let row_funcs = Funcmap::new().with("summary", summary(field.value, &link, ctx));
            row_template.generate(out, &row, &row_funcs)?;
        }
        Ok(())
    });
    Template::parse(STRUCT_TEMPLATE).generate(out, &heading, &funcs)
}

/// Every element with its index and a summary linking to its path.
pub(crate) fn collection_view(
    value: &dyn Inspect,
    items: &[&dyn Inspect],
    prefix: &str,
    ctx: &RequestContext,
    out: &mut dyn io::Write,
) -> Result<(), RenderError> {
    let heading = CollectionHeading {
        type_name: value.type_name(),
        len: items.len(),
    };
    let item_template = Template::parse(ITEM_TEMPLATE);
    let funcs = Funcmap::new().with_fn("items", |out| {
        for (index, &item) in items.iter().enumerate() {
            let link = subpath(prefix, &index.to_string());
            let row_funcs = Funcmap::new().with("summary", summary(item, &link, ctx));
            item_template.generate(out, &ItemRow { index }, &row_funcs)?;
        }
        Ok(())
    });
    Template::parse(COLLECTION_TEMPLATE).generate(out, &heading, &funcs)
}

/// The literal text of a leaf value followed by its type.
pub(crate) fn scalar_view(
    value: &dyn Inspect,
    scalar: &dyn Literal,
    out: &mut dyn io::Write,
) -> Result<(), RenderError> {
    let row = ScalarRow {
        literal: format!("{scalar:?}"),
        type_name: value.type_name(),
    };
    Template::parse(SCALAR_TEMPLATE).generate(out, &row, &Funcmap::new())
}
