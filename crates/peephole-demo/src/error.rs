//! Error types for the demo binary.

/// Top-level error for the demo binary.
///
/// Each variant wraps a specific startup error, providing a single error
/// type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Environment configuration is invalid.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: peephole_server::ConfigError,
    },

    /// The mount prefix is invalid.
    #[error("mount error: {source}")]
    Mount {
        /// The underlying mount error.
        #[from]
        source: peephole_server::MountError,
    },

    /// The server failed to start or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: peephole_server::ServerError,
    },
}
