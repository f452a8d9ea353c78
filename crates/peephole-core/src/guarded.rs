//! Lock-guarded values that can be mutated by their owner while being
//! browsed.

use std::fmt;
use std::io;
use std::sync::{LockResult, RwLock, RwLockReadGuard, RwLockWriteGuard};

use peephole_types::{
    Inspect, Inspector, Render, RenderError, RequestContext, Shape, Summarizer,
};

use crate::dispatch::render;
use crate::summary::summary;

/// Placeholder shown if a guarded value is inspected without its lock,
/// e.g. at the end of a template dot-chain or inside a parent's literal.
/// Prints bare in both `Display` and `Debug` form.
struct Placeholder;

static PLACEHOLDER: Placeholder = Placeholder;

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<guarded>")
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A value behind a [`RwLock`] that the browser reads under the lock.
///
/// The owner mutates the value through [`write`](Self::write). Each
/// render and each summary takes the read lock for its own duration
/// only, so a view is internally consistent but two views may observe
/// different states.
#[derive(Debug, Default)]
pub struct Guarded<T> {
    inner: RwLock<T>,
}

impl<T> Guarded<T> {
    /// Guard `value`.
    pub const fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(value),
        }
    }

    /// Acquire shared read access.
    pub fn read(&self) -> LockResult<RwLockReadGuard<'_, T>> {
        self.inner.read()
    }

    /// Acquire exclusive write access.
    pub fn write(&self) -> LockResult<RwLockWriteGuard<'_, T>> {
        self.inner.write()
    }

    /// Consume the guard and return the value.
    pub fn into_inner(self) -> LockResult<T> {
        self.inner.into_inner()
    }

    fn read_for_render(&self) -> Result<RwLockReadGuard<'_, T>, RenderError> {
        self.inner
            .read()
            .map_err(|e| RenderError::capability(format!("guarded value unavailable: {e}")))
    }
}

impl<T: Inspect> Inspect for Guarded<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(&PLACEHOLDER)
    }

    fn as_inspector(&self) -> Option<&dyn Inspector> {
        Some(self)
    }

    fn as_summarizer(&self) -> Option<&dyn Summarizer> {
        Some(self)
    }
}

impl<T: Inspect> Inspector for Guarded<T> {
    fn render(
        &self,
        prefix: &str,
        path: &[&str],
        ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        let guard = self.read_for_render()?;
        render(&*guard, prefix, path, ctx, out)
    }
}

impl<T: Inspect> Summarizer for Guarded<T> {
    fn summary(
        &self,
        prefix: &str,
        ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        let guard = self.read_for_render()?;
        summary(&*guard, prefix, ctx).render(out)
    }
}
