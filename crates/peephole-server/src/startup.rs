//! Startup helper for embedding the inspection server in a host process.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use peephole_server::{spawn_inspector, Mount, ServerConfig};
//!
//! let mount = Mount::new("/state/", Arc::new(app_state.clone()))?;
//! let (addr, handle) = spawn_inspector(&ServerConfig::from_env()?, vec![mount]).await?;
//! // The host keeps running; browse http://{addr}/state/
//! ```

use std::net::SocketAddr;

use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::mount::Mount;
use crate::router::build_router;
use crate::server::{bind, local_addr, serve, ServerError};

/// Errors that can occur when spawning the inspection server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to build its routes or bind.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the inspection server on a background Tokio task.
///
/// Mount validation and the TCP bind happen before the task is spawned,
/// so configuration errors are returned here rather than logged from the
/// background. Returns the bound address (useful with port `0`) and the
/// task handle, which the caller may abort or await during shutdown.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the mounts overlap or the listener
/// cannot bind.
pub async fn spawn_inspector(
    config: &ServerConfig,
    mounts: Vec<Mount>,
) -> Result<(SocketAddr, JoinHandle<()>), StartupError> {
    let mount_count = mounts.len();
    let router = build_router(mounts, config.verbose).map_err(ServerError::from)?;
    let listener = bind(config).await?;
    let addr = local_addr(&listener)?;

    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener, router).await {
            tracing::error!(error = %e, "inspection server exited with error");
        }
    });

    tracing::info!(%addr, mount_count, "inspection server spawned on background task");

    Ok((addr, handle))
}
