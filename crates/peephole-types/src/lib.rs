//! Shared type definitions for the Peephole object browser.
//!
//! Everything the traversal dispatcher and the template engine agree on
//! lives here:
//!
//! - [`Inspect`] and [`Shape`]: how a value in the inspected graph
//!   describes itself (struct, pointer, collection, or scalar)
//! - [`Inspector`], [`Summarizer`], and [`Render`]: optional capabilities
//!   a value may expose to take over its own rendering
//! - [`RequestContext`]: per-request data threaded through every render
//! - [`RenderError`]: the single error type returned by all rendering
//!
//! Implementations of [`Inspect`] are provided for the common standard
//! library scalars, smart pointers, and collections. User structs can use
//! the [`impl_inspect_struct!`] macro.

pub mod capability;
pub mod context;
pub mod error;
pub mod escape;
mod impls;
pub mod inspect;
pub mod literal;
mod macros;

// Re-export primary types for convenience.
pub use capability::{Inspector, Render, Summarizer};
pub use context::RequestContext;
pub use error::{PathError, RenderError, TemplateEvalError, TemplateSyntaxError};
pub use escape::EscapingWriter;
pub use inspect::{short_type_name, AsInspect, Field, Inspect, Literal, Shape};
pub use literal::literal;
