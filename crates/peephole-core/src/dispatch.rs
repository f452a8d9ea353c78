//! The traversal dispatcher.
//!
//! Navigation consumes exactly one path segment per composite hop.
//! Dereferencing a pointer is free: paths name data, not indirection.

use std::io;

use peephole_types::{Inspect, PathError, Render, RenderError, RequestContext, Shape};
use tracing::debug;

use crate::path::subpath;
use crate::views;

/// Fixed markup written for a nil pointer.
pub const NIL_MARKER: &str = "<div><p>nil</p></div>";

/// Render the view of `value` addressed by `path`.
///
/// `prefix` is the canonical path of `value` and is extended by one
/// segment for every hop. A value exposing an
/// [`Inspector`](peephole_types::Inspector) is handed the whole remaining
/// path; any other value goes through [`next_path`].
///
/// # Errors
///
/// Returns [`PathError`] when a segment cannot be resolved, and
/// propagates template, sink, and capability errors from the views and
/// capabilities rendered along the way.
pub fn render(
    value: &dyn Inspect,
    prefix: &str,
    path: &[&str],
    ctx: &RequestContext,
    out: &mut dyn io::Write,
) -> Result<(), RenderError> {
    if let Some(inspector) = value.as_inspector() {
        if ctx.verbose() {
            debug!(
                request_id = %ctx.request_id(),
                uri = ctx.uri(),
                mount = ctx.mount(),
                prefix,
                remaining = path.len(),
                type_name = %value.type_name(),
                "delegating to inspector"
            );
        }
        return inspector.render(prefix, path, ctx, out);
    }
    next_path(value, prefix, path, ctx, out)
}

/// Perform one hop of default navigation on `value`, or render its
/// default view when `path` is empty.
///
/// Unlike [`render`], this does not consult `value`'s own `Inspector`,
/// so an `Inspector` implementation can call it on itself to fall back
/// to field-by-field navigation:
///
/// ```rust,ignore
/// impl Inspector for Foo {
///     fn render(&self, prefix: &str, path: &[&str], ctx: &RequestContext,
///               out: &mut dyn io::Write) -> Result<(), RenderError> {
///         if !path.is_empty() {
///             return peephole_core::next_path(self, prefix, path, ctx, out);
///         }
///         // custom terminal view
///     }
/// }
/// ```
///
/// Values reached by the hop are dispatched with [`render`] again.
///
/// # Errors
///
/// Same as [`render`].
pub fn next_path(
    value: &dyn Inspect,
    prefix: &str,
    path: &[&str],
    ctx: &RequestContext,
    out: &mut dyn io::Write,
) -> Result<(), RenderError> {
    let shape = value.shape();
    if ctx.verbose() {
        debug!(
            request_id = %ctx.request_id(),
            uri = ctx.uri(),
            mount = ctx.mount(),
            prefix,
            kind = shape.kind(),
            segment = path.first().copied().unwrap_or_default(),
            "traversal hop"
        );
    }

    match shape {
        Shape::Pointer(None) => {
            out.write_all(NIL_MARKER.as_bytes())?;
            Ok(())
        }
        Shape::Pointer(Some(target)) => render(target, prefix, path, ctx, out),
        Shape::Struct(fields) => {
            let Some((&segment, rest)) = path.split_first() else {
                return views::struct_view(value, &fields, prefix, ctx, out);
            };
            let field = fields
                .into_iter()
                .find(|field| field.name == segment)
                .ok_or_else(|| PathError::UnknownField {
                    field: segment.to_owned(),
                    type_name: value.type_name(),
                    prefix: prefix.to_owned(),
                })?;
            render(field.value, &subpath(prefix, segment), rest, ctx, out)
        }
        Shape::Collection(items) => {
            let Some((&segment, rest)) = path.split_first() else {
                return views::collection_view(value, &items, prefix, ctx, out);
            };
            let index = parse_index(segment, prefix, items.len())?;
            let item = items
                .get(index)
                .copied()
                .ok_or_else(|| out_of_range(segment, prefix, items.len()))?;
            render(item, &subpath(prefix, segment), rest, ctx, out)
        }
        Shape::Scalar(scalar) => match path.first() {
            Some(&segment) => Err(PathError::CannotDescend {
                segment: segment.to_owned(),
                type_name: value.type_name(),
                prefix: prefix.to_owned(),
            }
            .into()),
            None => views::scalar_view(value, scalar, out),
        },
    }
}

/// Defer [`render`] until the returned callable is rendered, typically as
/// an entry of a template funcmap.
pub fn render_fn<'a>(
    value: &'a dyn Inspect,
    prefix: &'a str,
    path: &'a [&'a str],
    ctx: &'a RequestContext,
) -> impl Render + 'a {
    move |out: &mut dyn io::Write| render(value, prefix, path, ctx, out)
}

/// Parse a collection index segment and check it against `len`.
///
/// Only ASCII digits are accepted. A digit string too large for `usize`
/// is necessarily out of range.
fn parse_index(segment: &str, prefix: &str, len: usize) -> Result<usize, PathError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathError::InvalidIndexFormat {
            segment: segment.to_owned(),
            prefix: prefix.to_owned(),
        });
    }
    segment
        .parse::<usize>()
        .ok()
        .filter(|&index| index < len)
        .ok_or_else(|| out_of_range(segment, prefix, len))
}

fn out_of_range(segment: &str, prefix: &str, len: usize) -> PathError {
    PathError::IndexOutOfRange {
        segment: segment.to_owned(),
        len,
        prefix: prefix.to_owned(),
    }
}
