//! Generic traversal core of the Peephole object browser.
//!
//! Given a root value, a canonical path prefix, and the remaining path
//! segments of a request, [`render`] decides by the value's
//! [`Shape`](peephole_types::Shape), or by a capability the value
//! exposes, how to render it or descend one hop:
//!
//! - a value with an [`Inspector`](peephole_types::Inspector) takes over
//!   completely
//! - pointers are dereferenced without consuming a segment; nil renders a
//!   fixed marker
//! - structs consume a segment as a field name, collections as an index
//! - scalars render their literal text and cannot be descended into
//!
//! Terminal views are emitted through the template engine, with each
//! nested value shown as a [`summary`] that links one level deeper.
//!
//! # Concurrency
//!
//! Rendering is synchronous and only ever reads the graph. The core takes
//! no locks; wrap live, mutable state in [`Guarded`] or synchronise it
//! some other way before exposing it.

pub mod dispatch;
pub mod guarded;
pub mod path;
pub mod summary;
mod views;

// Re-export primary types for convenience.
pub use dispatch::{next_path, render, render_fn, NIL_MARKER};
pub use guarded::Guarded;
pub use path::{split_path, subpath};
pub use summary::{summary, Summary};

pub use peephole_template::{Funcmap, Template};
pub use peephole_types::{
    impl_inspect_struct, Field, Inspect, Inspector, PathError, Render, RenderError,
    RequestContext, Shape, Summarizer,
};
