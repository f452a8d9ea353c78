//! Inspection server lifecycle management.
//!
//! [`start_server`] binds to the configured address and serves the
//! mounted graphs until the process is terminated. [`bind`] and [`serve`]
//! split the two phases for callers that need to observe a bind failure
//! before handing the listener to a background task.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::mount::{Mount, MountError};
use crate::router::build_router;

/// Errors that can occur when starting or running the inspection server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The mounts could not be combined into a router.
    #[error("mount error: {0}")]
    Mount(#[from] MountError),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Start the inspection server and serve `mounts` until shutdown.
///
/// # Errors
///
/// Returns an error if the mounts overlap, the TCP listener cannot bind,
/// or the server encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, mounts: Vec<Mount>) -> Result<(), ServerError> {
    let prefixes: Vec<String> = mounts.iter().map(|m| m.prefix().to_owned()).collect();
    let router = build_router(mounts, config.verbose)?;
    let listener = bind(config).await?;
    info!(?prefixes, "mounted object graphs");
    serve(listener, router).await
}

/// Bind a TCP listener on the configured address.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is malformed or in use.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {address}: {e}")))?;
    let addr = local_addr(&listener)?;
    info!(%addr, "inspection server listening");
    Ok(listener)
}

/// Serve `router` on an already bound listener.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if serving fails.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), ServerError> {
    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))
}

/// The address a bound listener actually uses (resolves port `0`).
pub(crate) fn local_addr(listener: &TcpListener) -> Result<SocketAddr, ServerError> {
    listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address: {e}")))
}
