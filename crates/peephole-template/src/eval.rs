//! Evaluation of a parsed action against a root value and a funcmap.

use std::io::{self, Write};

use peephole_types::{
    literal, EscapingWriter, Inspect, RenderError, Shape, TemplateEvalError,
};

use crate::ast::ActionNode;
use crate::funcmap::Funcmap;

/// Evaluate `node` and write its result to `out`.
///
/// A function reference invokes the named callable. A dot-chain resolves
/// to a value: if that value exposes [`Render`](peephole_types::Render)
/// it is invoked, otherwise its text is written HTML-escaped. Scalars are
/// written with their `Display` form, nil pointers as `nil`, and other
/// composites with their literal representation.
///
/// # Errors
///
/// Returns [`TemplateEvalError`] when a name or field cannot be resolved,
/// and propagates errors from invoked callables and from `out`.
pub fn evaluate(
    node: &ActionNode,
    root: &dyn Inspect,
    funcs: &Funcmap<'_>,
    out: &mut dyn io::Write,
) -> Result<(), RenderError> {
    match node {
        ActionNode::FunctionRef(name) => {
            let func = funcs
                .get(name)
                .ok_or_else(|| TemplateEvalError::UnknownFunction { name: name.clone() })?;
            func.render(out)
        }
        ActionNode::FieldChain { base, field } => {
            let value = resolve(base.as_deref(), field, root)?;
            write_value(value, out)
        }
    }
}

/// Resolve the value a dot-chain ending in `field` refers to.
///
/// # Errors
///
/// Returns [`TemplateEvalError::InvalidFieldAccess`] when a step is
/// applied to a non-struct value and [`TemplateEvalError::UnknownField`]
/// when a struct lacks the named field.
pub fn resolve<'v>(
    base: Option<&ActionNode>,
    field: &str,
    root: &'v dyn Inspect,
) -> Result<&'v dyn Inspect, TemplateEvalError> {
    let current = match base {
        None => root,
        Some(ActionNode::FieldChain { base, field }) => resolve(base.as_deref(), field, root)?,
        Some(ActionNode::FunctionRef(name)) => {
            return Err(TemplateEvalError::InvalidFieldAccess {
                field: field.to_owned(),
                type_name: format!("fn {name}"),
            });
        }
    };
    field_of(current, field)
}

/// Take `field` from `value`, looking through pointers.
fn field_of<'v>(
    mut value: &'v dyn Inspect,
    field: &str,
) -> Result<&'v dyn Inspect, TemplateEvalError> {
    loop {
        match value.shape() {
            Shape::Pointer(Some(target)) => value = target,
            Shape::Struct(fields) => {
                return fields
                    .into_iter()
                    .find(|candidate| candidate.name == field)
                    .map(|found| found.value)
                    .ok_or_else(|| TemplateEvalError::UnknownField {
                        field: field.to_owned(),
                        type_name: value.type_name(),
                    });
            }
            Shape::Pointer(None) | Shape::Collection(_) | Shape::Scalar(_) => {
                return Err(TemplateEvalError::InvalidFieldAccess {
                    field: field.to_owned(),
                    type_name: value.type_name(),
                });
            }
        }
    }
}

fn write_value(mut value: &dyn Inspect, out: &mut dyn io::Write) -> Result<(), RenderError> {
    loop {
        if let Some(render) = value.as_render() {
            return render.render(out);
        }
        let mut escaped = EscapingWriter::new(&mut *out);
        match value.shape() {
            Shape::Pointer(Some(target)) => value = target,
            Shape::Pointer(None) => {
                escaped.write_all(b"nil")?;
                return Ok(());
            }
            Shape::Scalar(scalar) => {
                write!(escaped, "{scalar}")?;
                return Ok(());
            }
            Shape::Struct(_) | Shape::Collection(_) => {
                escaped.write_all(literal(value).as_bytes())?;
                return Ok(());
            }
        }
    }
}
