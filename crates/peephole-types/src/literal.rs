//! Default literal representation of an arbitrary value.
//!
//! Used as the visible text of default summaries and when a template
//! dot-chain ends on a composite value. Scalars use their `Debug` form;
//! composites are written recursively, bounded in depth and width so
//! that a summary of a large graph stays a summary.

use std::fmt::Write;

use crate::inspect::{Inspect, Shape};

/// Nesting depth past which composites are elided.
const MAX_DEPTH: usize = 4;

/// Number of collection elements written before truncating.
const MAX_ELEMENTS: usize = 16;

/// Marker written in place of elided content.
const ELLIPSIS: &str = "…";

/// Render the literal representation of `value`.
///
/// ```text
/// 10                     i64
/// "hello"                String
/// nil                    None
/// [1, 2, 3]              Vec<i64>
/// Bar{baz: 0, boo: ""}   struct Bar
/// ```
pub fn literal(value: &dyn Inspect) -> String {
    let mut out = String::new();
    write_literal(value, 0, &mut out);
    out
}

fn write_literal(value: &dyn Inspect, depth: usize, out: &mut String) {
    if depth > MAX_DEPTH {
        out.push_str(ELLIPSIS);
        return;
    }
    let next = depth.saturating_add(1);
    match value.shape() {
        Shape::Scalar(scalar) => {
            // Writing into a String cannot fail.
            let _ = write!(out, "{scalar:?}");
        }
        Shape::Pointer(None) => out.push_str("nil"),
        Shape::Pointer(Some(target)) => write_literal(target, next, out),
        Shape::Struct(fields) => {
            out.push_str(&value.type_name());
            out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&field.name);
                out.push_str(": ");
                write_literal(field.value, next, out);
            }
            out.push('}');
        }
        Shape::Collection(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if i >= MAX_ELEMENTS {
                    out.push_str(ELLIPSIS);
                    break;
                }
                write_literal(*item, next, out);
            }
            out.push(']');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bar {
        baz: i64,
        boo: String,
    }

    crate::impl_inspect_struct!(Bar { baz, boo });

    struct Nest {
        inner: Option<Box<Self>>,
    }

    crate::impl_inspect_struct!(Nest { inner });

    #[test]
    fn scalars_use_debug_form() {
        assert_eq!(literal(&10_i64), "10");
        assert_eq!(literal(&String::from("hello")), "\"hello\"");
        assert_eq!(literal(&true), "true");
    }

    #[test]
    fn pointers_are_transparent() {
        assert_eq!(literal(&None::<i64>), "nil");
        assert_eq!(literal(&Some(Box::new(7_u8))), "7");
    }

    #[test]
    fn structs_and_collections() {
        let bar = Bar {
            baz: 0,
            boo: String::new(),
        };
        assert_eq!(literal(&bar), "Bar{baz: 0, boo: \"\"}");
        assert_eq!(literal(&vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(literal(&Vec::<i64>::new()), "[]");
    }

    #[test]
    fn long_collections_are_truncated() {
        let items: Vec<u32> = (0..40).collect();
        let text = literal(&items);
        assert!(text.starts_with("[0, 1, 2"));
        assert!(text.ends_with(", …]"));
        assert!(!text.contains("16"));
    }

    #[test]
    fn deep_nesting_is_elided() {
        let mut value = Nest { inner: None };
        for _ in 0..10 {
            value = Nest {
                inner: Some(Box::new(value)),
            };
        }
        let text = literal(&value);
        assert!(text.contains(ELLIPSIS));
        assert!(!text.contains("nil"));
    }
}
