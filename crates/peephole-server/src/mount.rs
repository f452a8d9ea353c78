//! Attachment of an object graph under a URL prefix.

use std::fmt;
use std::sync::Arc;

use peephole_types::Inspect;

/// Errors raised when a mount is declared or combined with others.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// The prefix does not start and end with `/`, or contains a route
    /// pattern brace.
    #[error("mount prefix `{prefix}` must start and end with `/` and contain no `{{` or `}}`")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// Two mounts claim the same prefix, or one prefix lies under another.
    #[error("mount prefix `{prefix}` overlaps `{other}`")]
    Overlapping {
        /// The prefix being added.
        prefix: String,
        /// The prefix already mounted.
        other: String,
    },
}

/// An inspectable root served under a URL prefix.
///
/// The root is shared with the host process. It is only ever read by the
/// server; any state the host mutates while it is mounted must be
/// synchronised by the host, e.g. with
/// [`Guarded`](peephole_core::Guarded).
#[derive(Clone)]
pub struct Mount {
    prefix: String,
    root: Arc<dyn Inspect + Send + Sync>,
}

impl Mount {
    /// Mount `root` under `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::InvalidPrefix`] unless `prefix` starts and
    /// ends with `/`. Braces are rejected since they would be read as
    /// route parameters.
    pub fn new(
        prefix: impl Into<String>,
        root: Arc<dyn Inspect + Send + Sync>,
    ) -> Result<Self, MountError> {
        let prefix = prefix.into();
        if !prefix.starts_with('/') || !prefix.ends_with('/') || prefix.contains(['{', '}']) {
            return Err(MountError::InvalidPrefix { prefix });
        }
        Ok(Self { prefix, root })
    }

    /// The URL prefix, with leading and trailing `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The mounted root value.
    pub const fn root(&self) -> &Arc<dyn Inspect + Send + Sync> {
        &self.root
    }

    /// Whether this mount and `other` would compete for the same URLs.
    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        self.prefix.starts_with(&other.prefix) || other.prefix.starts_with(&self.prefix)
    }
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("prefix", &self.prefix)
            .field("root", &(*self.root).type_name())
            .finish()
    }
}
