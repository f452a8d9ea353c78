//! HTML escaping for values written into generated views.

use std::io::{self, Write};

/// Wraps a `Write` and escapes HTML special characters as bytes pass
/// through.
///
/// Escapes `&`, `<`, `>`, `"`, and `'`, which makes the output safe both
/// as element text and inside quoted attribute values.
pub struct EscapingWriter<'a> {
    inner: &'a mut dyn Write,
}

impl<'a> EscapingWriter<'a> {
    /// Wrap `inner`.
    pub fn new(inner: &'a mut dyn Write) -> Self {
        Self { inner }
    }
}

impl Write for EscapingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &b in buf {
            match b {
                b'&' => self.inner.write_all(b"&amp;")?,
                b'<' => self.inner.write_all(b"&lt;")?,
                b'>' => self.inner.write_all(b"&gt;")?,
                b'"' => self.inner.write_all(b"&quot;")?,
                b'\'' => self.inner.write_all(b"&#39;")?,
                _ => self.inner.write_all(&[b])?,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
