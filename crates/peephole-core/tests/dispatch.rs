//! Integration tests for the traversal dispatcher.
//!
//! Each test builds a small object graph and renders it through
//! [`peephole_core::render`] into an in-memory buffer.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::io;

use peephole_core::{
    impl_inspect_struct, next_path, render, render_fn, split_path, Funcmap, Guarded, Inspect,
    Inspector, PathError, RenderError, RequestContext, Summarizer, Template, NIL_MARKER,
};

struct Leaf {
    z: String,
}

struct Middle {
    y: Leaf,
    maybe: Option<Box<Leaf>>,
}

struct Root {
    name: String,
    ints: Vec<i64>,
    middle: Middle,
    tagged: Tagged,
}

impl_inspect_struct!(Leaf { z });
impl_inspect_struct!(Middle { y, maybe });
impl_inspect_struct!(Root { name, ints, middle, tagged });

/// Summarizes itself and takes over its own view when the path ends on it.
struct Tagged {
    label: String,
    count: u32,
}

impl_inspect_struct!(Tagged { label, count }, with: [inspector, summarizer]);

impl Inspector for Tagged {
    fn render(
        &self,
        prefix: &str,
        path: &[&str],
        ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        if !path.is_empty() {
            return next_path(self, prefix, path, ctx, out);
        }
        write!(out, "<h1>tagged {} at {prefix}</h1>", self.label)?;
        Ok(())
    }
}

impl Summarizer for Tagged {
    fn summary(
        &self,
        prefix: &str,
        _ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        write!(out, r#"<a href="{prefix}">#{}</a>"#, self.label)?;
        Ok(())
    }
}

fn sample() -> Root {
    Root {
        name: String::from("sample"),
        ints: vec![10, 20, 30],
        middle: Middle {
            y: Leaf {
                z: String::from("deep"),
            },
            maybe: None,
        },
        tagged: Tagged {
            label: String::from("t1"),
            count: 4,
        },
    }
}

fn view(value: &dyn Inspect, prefix: &str, path: &[&str]) -> Result<String, RenderError> {
    let ctx = RequestContext::new(prefix, prefix);
    let mut buf = Vec::new();
    render(value, prefix, path, &ctx, &mut buf)?;
    Ok(String::from_utf8(buf).unwrap())
}

fn path_error(value: &dyn Inspect, path: &[&str]) -> PathError {
    match view(value, "/root", path) {
        Err(RenderError::Path(err)) => err,
        other => panic!("expected a path error, got {other:?}"),
    }
}

#[test]
fn field_hop_is_equivalent_to_rendering_the_field() {
    let root = sample();
    assert_eq!(
        view(&root, "/root", &["middle", "y"]).unwrap(),
        view(&root.middle.y, "/root/middle/y", &[]).unwrap()
    );
    assert_eq!(
        view(&root, "/root", &["ints", "1"]).unwrap(),
        view(&20_i64, "/root/ints/1", &[]).unwrap()
    );
}

#[test]
fn struct_view_lists_fields_with_links() {
    let html = view(&sample(), "/root", &[]).unwrap();
    assert!(html.contains("struct Root {"));
    assert!(html.contains(r#"name String : <a href="/root/name">&quot;sample&quot;</a>"#));
    assert!(html.contains(r#"ints Vec&lt;i64&gt; : <a href="/root/ints">[10, 20, 30]</a>"#));
    assert!(html.contains(r#"<a href="/root/tagged">#t1</a>"#));

    let name_at = html.find("name String").unwrap();
    let ints_at = html.find("ints Vec").unwrap();
    assert!(name_at < ints_at, "fields render in declaration order");
}

#[test]
fn collection_view_lists_elements_with_links() {
    let html = view(&sample(), "/root", &["ints"]).unwrap();
    assert!(html.contains("Vec&lt;i64&gt; (3 elements)"));
    assert!(html.contains(r#"0: <a href="/root/ints/0">10</a>"#));
    assert!(html.contains(r#"2: <a href="/root/ints/2">30</a>"#));
}

#[test]
fn scalar_view_shows_literal_and_type() {
    let html = view(&sample(), "/root", &["ints", "2"]).unwrap();
    assert!(html.contains("<p>30 i64</p>"));
}

#[test]
fn unknown_field_is_reported_with_prefix() {
    let err = path_error(&sample(), &["middle", "nope"]);
    assert_eq!(
        err,
        PathError::UnknownField {
            field: String::from("nope"),
            type_name: String::from("Middle"),
            prefix: String::from("/root/middle"),
        }
    );
}

#[test]
fn field_names_are_case_sensitive() {
    assert!(matches!(
        path_error(&sample(), &["Name"]),
        PathError::UnknownField { .. }
    ));
}

#[test]
fn out_of_range_index_reports_length() {
    let err = path_error(&sample(), &["ints", "3"]);
    assert_eq!(
        err,
        PathError::IndexOutOfRange {
            segment: String::from("3"),
            len: 3,
            prefix: String::from("/root/ints"),
        }
    );
    assert!(err.to_string().contains("contains only 3 elements"));
}

#[test]
fn non_numeric_index_is_rejected() {
    for segment in ["x", "-1", "1e2"] {
        assert!(matches!(
            path_error(&sample(), &["ints", segment]),
            PathError::InvalidIndexFormat { .. }
        ));
    }
}

#[test]
fn scalars_cannot_be_descended_into() {
    let err = path_error(&sample(), &["name", "more"]);
    assert_eq!(
        err,
        PathError::CannotDescend {
            segment: String::from("more"),
            type_name: String::from("String"),
            prefix: String::from("/root/name"),
        }
    );
}

#[test]
fn nil_pointer_renders_marker_even_with_remaining_path() {
    let root = sample();
    assert_eq!(view(&root, "/root", &["middle", "maybe"]).unwrap(), NIL_MARKER);
    assert_eq!(
        view(&root, "/root", &["middle", "maybe", "z"]).unwrap(),
        NIL_MARKER
    );
}

#[test]
fn pointers_are_dereferenced_without_consuming_a_segment() {
    let mut root = sample();
    root.middle.maybe = Some(Box::new(Leaf {
        z: String::from("boxed"),
    }));
    let html = view(&root, "/root", &["middle", "maybe", "z"]).unwrap();
    assert!(html.contains("&quot;boxed&quot; String"));
}

#[test]
fn inspector_takes_over_and_falls_back_to_next_path() {
    let root = sample();
    assert_eq!(
        view(&root, "/root", &["tagged"]).unwrap(),
        "<h1>tagged t1 at /root/tagged</h1>"
    );
    let html = view(&root, "/root", &["tagged", "count"]).unwrap();
    assert!(html.contains("<p>4 u32</p>"));
    assert!(matches!(
        path_error(&root, &["tagged", "missing"]),
        PathError::UnknownField { .. }
    ));
}

#[test]
fn segments_come_from_split_path() {
    let root = sample();
    let segments = split_path("middle//y/");
    assert_eq!(
        view(&root, "/root", &segments).unwrap(),
        view(&root, "/root", &["middle", "y"]).unwrap()
    );
}

#[test]
fn render_fn_defers_until_the_template_calls_it() {
    let root = sample();
    let ctx = RequestContext::default();
    let path = ["middle", "y", "z"];
    let funcs = Funcmap::new().with("body", render_fn(&root, "/root", &path, &ctx));
    let html = Template::parse("<main>{{ body }}</main>")
        .generate_to_string(&root, &funcs)
        .unwrap();
    assert!(html.starts_with("<main>"));
    assert!(html.contains("&quot;deep&quot; String"));
    assert!(html.ends_with("</main>"));
}

#[test]
fn guarded_state_is_rendered_under_its_lock() {
    struct Live {
        counters: Guarded<Vec<u64>>,
    }
    impl_inspect_struct!(Live { counters });

    let live = Live {
        counters: Guarded::new(vec![1, 2]),
    };
    let before = view(&live, "/live", &["counters"]).unwrap();
    assert!(before.contains("(2 elements)"));

    live.counters.write().unwrap().push(3);
    let after = view(&live, "/live", &["counters"]).unwrap();
    assert!(after.contains("(3 elements)"));

    let parent = view(&live, "/live", &[]).unwrap();
    assert!(parent.contains(r#"<a href="/live/counters">[1, 2, 3]</a>"#));
}
