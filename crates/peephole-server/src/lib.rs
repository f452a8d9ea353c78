//! HTTP mounting layer for the Peephole object browser.
//!
//! Serves one or more inspectable object graphs over HTTP. Each graph is
//! attached under a URL prefix with a [`Mount`]; a `GET` to
//! `{prefix}{a/b/c}` renders the view of the value at path `a/b/c`
//! through [`peephole_core::render`].
//!
//! - [`build_router`] assembles the axum [`Router`](axum::Router) for a
//!   set of mounts
//! - [`start_server`] binds and serves in the foreground
//! - [`spawn_inspector`] runs the server on a background tokio task for
//!   embedding in a host process
//!
//! Rendering is synchronous, so each request renders on tokio's blocking
//! pool into an in-memory buffer. Any failure, including a panic inside a
//! user capability, becomes an HTTP 500 for that request alone.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mount;
pub mod router;
pub mod server;
pub mod startup;

// Re-export primary types for convenience.
pub use config::{ConfigError, ServerConfig};
pub use error::InspectError;
pub use mount::{Mount, MountError};
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use startup::{spawn_inspector, StartupError};
