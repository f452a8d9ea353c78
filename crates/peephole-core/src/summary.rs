//! Compact, linked rendering of a value inside a parent view.

use std::io::{self, Write};

use peephole_types::{literal, EscapingWriter, Inspect, Render, RenderError, RequestContext};

/// A deferred summary of one value, produced by [`summary`].
pub struct Summary<'a> {
    value: &'a dyn Inspect,
    prefix: &'a str,
    ctx: &'a RequestContext,
}

/// Summarize `value`, whose canonical path is `prefix`.
///
/// Nothing is written until the returned [`Summary`] is rendered. A value
/// with a [`Summarizer`](peephole_types::Summarizer) controls the whole
/// fragment; any other value becomes a link to `prefix` labelled with its
/// literal representation.
pub fn summary<'a>(
    value: &'a dyn Inspect,
    prefix: &'a str,
    ctx: &'a RequestContext,
) -> Summary<'a> {
    Summary { value, prefix, ctx }
}

impl Render for Summary<'_> {
    fn render(&self, out: &mut dyn io::Write) -> Result<(), RenderError> {
        if let Some(summarizer) = self.value.as_summarizer() {
            return summarizer.summary(self.prefix, self.ctx, out);
        }
        out.write_all(b"<a href=\"")?;
        EscapingWriter::new(&mut *out).write_all(self.prefix.as_bytes())?;
        out.write_all(b"\">")?;
        EscapingWriter::new(&mut *out).write_all(literal(self.value).as_bytes())?;
        out.write_all(b"</a>")?;
        Ok(())
    }
}
