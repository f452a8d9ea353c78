//! Per-request data passed through every render call.

use uuid::Uuid;

/// Context of the inbound request a render belongs to.
///
/// Created once per request by the HTTP layer and borrowed by the
/// dispatcher, summaries, and capability implementations.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Identifier used to correlate log lines for one request.
    request_id: Uuid,
    /// The full request path as received.
    uri: String,
    /// The mount prefix the request was routed through.
    mount: String,
    /// Whether per-hop traversal events are logged.
    verbose: bool,
}

impl RequestContext {
    /// Create a context for a request to `uri` served from `mount`.
    pub fn new(uri: impl Into<String>, mount: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            uri: uri.into(),
            mount: mount.into(),
            verbose: false,
        }
    }

    /// Enable or disable per-hop traversal logging.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The request identifier.
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// The full request path.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The mount prefix.
    pub fn mount(&self) -> &str {
        &self.mount
    }

    /// Whether per-hop traversal logging is enabled.
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new("/", "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_request_path_and_mount() {
        let ctx = RequestContext::new("/oop/jar/0", "/oop/").with_verbose(true);
        assert_eq!(ctx.uri(), "/oop/jar/0");
        assert_eq!(ctx.mount(), "/oop/");
        assert!(ctx.verbose());
    }

    #[test]
    fn request_ids_are_distinct() {
        let a = RequestContext::default();
        let b = RequestContext::default();
        assert_ne!(a.request_id(), b.request_id());
        assert!(!a.verbose());
    }
}
