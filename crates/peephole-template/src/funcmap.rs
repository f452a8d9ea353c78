//! Named render callables available to actions during one render.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use peephole_types::{Render, RenderError};

/// Table of named [`Render`] callables.
///
/// A funcmap is built by the caller for a single
/// [`Template::generate`](crate::Template::generate) call and may borrow
/// anything that outlives it.
#[derive(Default)]
pub struct Funcmap<'a> {
    funcs: BTreeMap<String, Box<dyn Render + 'a>>,
}

impl<'a> Funcmap<'a> {
    /// Create an empty funcmap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `func` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, func: impl Render + 'a) {
        self.funcs.insert(name.into(), Box::new(func));
    }

    /// Register a closure under `name`.
    ///
    /// Equivalent to [`insert`](Self::insert), but lets the closure's
    /// argument type be inferred.
    pub fn insert_fn<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&mut dyn io::Write) -> Result<(), RenderError> + 'a,
    {
        self.insert(name, func);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, func: impl Render + 'a) -> Self {
        self.insert(name, func);
        self
    }

    /// Builder form of [`insert_fn`](Self::insert_fn).
    #[must_use]
    pub fn with_fn<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut dyn io::Write) -> Result<(), RenderError> + 'a,
    {
        self.insert_fn(name, func);
        self
    }

    /// Look up a callable by exact name.
    pub fn get(&self, name: &str) -> Option<&(dyn Render + 'a)> {
        self.funcs.get(name).map(|func| &**func)
    }

    /// Number of registered callables.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Whether no callables are registered.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl fmt::Debug for Funcmap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.funcs.keys()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_callable_by_name() {
        let funcs = Funcmap::new().with_fn("greet", |out| {
            write!(out, "hi")?;
            Ok(())
        });
        let mut buf = Vec::new();
        funcs.get("greet").unwrap().render(&mut buf).unwrap();
        assert_eq!(buf, b"hi");
        assert!(funcs.get("Greet").is_none());
        assert_eq!(funcs.len(), 1);
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let mut funcs = Funcmap::new();
        assert!(funcs.is_empty());
        funcs.insert_fn("f", |out| {
            out.write_all(b"one")?;
            Ok(())
        });
        funcs.insert_fn("f", |out| {
            out.write_all(b"two")?;
            Ok(())
        });
        let mut buf = Vec::new();
        funcs.get("f").unwrap().render(&mut buf).unwrap();
        assert_eq!(buf, b"two");
        assert_eq!(funcs.len(), 1);
        assert!(!funcs.is_empty());
    }

    #[test]
    fn debug_lists_names() {
        let funcs = Funcmap::new()
            .with_fn("b", |_| Ok(()))
            .with_fn("a", |_| Ok(()));
        assert_eq!(format!("{funcs:?}"), r#"{"a", "b"}"#);
    }
}
