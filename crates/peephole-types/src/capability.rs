//! Optional behavior contracts a value in the inspected graph may expose.
//!
//! The dispatcher queries these through [`Inspect`](crate::Inspect) on
//! every call and never caches the answer.

use std::io;

use crate::context::RequestContext;
use crate::error::RenderError;

/// A lazily invoked unit of HTML output.
///
/// Template function maps hold `Render` values, and summaries are
/// returned as `Render` so the caller decides where they are written.
/// Any closure of shape `Fn(&mut dyn io::Write) -> Result<(), RenderError>`
/// is a `Render`.
pub trait Render {
    /// Write this unit of output to `out`.
    fn render(&self, out: &mut dyn io::Write) -> Result<(), RenderError>;
}

impl<F> Render for F
where
    F: Fn(&mut dyn io::Write) -> Result<(), RenderError>,
{
    fn render(&self, out: &mut dyn io::Write) -> Result<(), RenderError> {
        self(out)
    }
}

/// Full control over a value's rendering and over the remaining path.
///
/// An implementation may handle `path` itself, or hand it back to the
/// default one-hop navigation with `peephole_core::next_path`.
pub trait Inspector {
    /// Render the view addressed by `path`, relative to this value at
    /// `prefix`.
    fn render(
        &self,
        prefix: &str,
        path: &[&str],
        ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError>;
}

/// Custom compact summary of a value, shown where a parent view lists it.
///
/// The summary usually links to `prefix`, the canonical path of the value.
pub trait Summarizer {
    /// Write a short HTML fragment describing this value.
    fn summary(
        &self,
        prefix: &str,
        ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError>;
}
