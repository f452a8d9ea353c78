//! Template text and the literal/action scanner.

use std::io;

use peephole_types::{Inspect, Render, RenderError, TemplateSyntaxError};

use crate::eval::evaluate;
use crate::funcmap::Funcmap;
use crate::parser::parse_section;

/// Opening delimiter of an action.
const OPEN: &str = "{{";

/// Closing delimiter of an action.
const CLOSE: &str = "}}";

/// Immutable template source text.
///
/// Holding a `Template` does not hold a parsed form: each
/// [`generate`](Self::generate) call scans the text and parses every
/// action again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Wrap template text. Syntax is checked when the template is
    /// generated.
    pub fn parse(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read template text from `reader`.
    ///
    /// # Errors
    ///
    /// Returns the reader's I/O error, or `InvalidData` when the text is
    /// not UTF-8.
    pub fn from_reader(mut reader: impl io::Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self { text })
    }

    /// The source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render the template to `out`.
    ///
    /// Text outside actions is copied verbatim. Each `{{ ... }}` action is
    /// parsed and evaluated against `root` and `funcs` in order. Output
    /// produced before a failing action has already been written.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateSyntaxError::UnterminatedAction`] when an action
    /// has no closing `}}`, any other syntax or evaluation error raised by
    /// an action, and write errors from `out`.
    pub fn generate(
        &self,
        out: &mut dyn io::Write,
        root: &dyn Inspect,
        funcs: &Funcmap<'_>,
    ) -> Result<(), RenderError> {
        let mut rest = self.text.as_str();
        while let Some(open) = rest.find(OPEN) {
            let (literal, from_open) = rest.split_at(open);
            out.write_all(literal.as_bytes())?;

            let offset = self.text.len().saturating_sub(from_open.len());
            let body = from_open.strip_prefix(OPEN).unwrap_or(from_open);
            let Some(close) = body.find(CLOSE) else {
                return Err(TemplateSyntaxError::UnterminatedAction { offset }.into());
            };
            let (action, from_close) = body.split_at(close);

            let node = parse_section(action)?;
            evaluate(&node, root, funcs, out)?;

            rest = from_close.strip_prefix(CLOSE).unwrap_or(from_close);
        }
        out.write_all(rest.as_bytes())?;
        Ok(())
    }

    /// Render the template into a new `String`.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_to_string(
        &self,
        root: &dyn Inspect,
        funcs: &Funcmap<'_>,
    ) -> Result<String, RenderError> {
        let mut buf = Vec::with_capacity(self.text.len());
        self.generate(&mut buf, root, funcs)?;
        String::from_utf8(buf)
            .map_err(|e| RenderError::Sink(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Defer [`generate`](Self::generate) until the returned callable is
    /// rendered, typically as an entry of an enclosing template's
    /// funcmap.
    pub fn generate_fn<'a>(
        &'a self,
        root: &'a dyn Inspect,
        funcs: &'a Funcmap<'a>,
    ) -> impl Render + 'a {
        move |out: &mut dyn io::Write| self.generate(out, root, funcs)
    }
}
