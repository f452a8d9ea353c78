//! Demo host process for the Peephole object browser.
//!
//! Builds a small object graph with a custom-rendered root, a custom
//! summary, heterogeneous collections, and a lock-guarded counter that a
//! background task keeps updating, then serves it over HTTP.
//!
//! # Environment
//!
//! - `PEEPHOLE_PREFIX` -- mount prefix (default `/oop/`)
//! - `PEEPHOLE_HOST`, `PEEPHOLE_PORT`, `PEEPHOLE_VERBOSE` -- see
//!   [`ServerConfig::from_env`]
//! - `RUST_LOG` -- log filter (default `info`)

mod error;
mod model;

use std::sync::Arc;
use std::time::Duration;

use peephole_server::{start_server, Mount, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::DemoError;

/// Mount prefix used when `PEEPHOLE_PREFIX` is unset.
const DEFAULT_PREFIX: &str = "/oop/";

/// Interval between updates of the live counters.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Application entry point.
///
/// Initializes logging, loads configuration, starts the counter task, and
/// serves the sample graph until the process is terminated.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("peephole-demo starting");

    run().await?;
    Ok(())
}

async fn run() -> Result<(), DemoError> {
    let config = ServerConfig::from_env()?;
    let prefix = std::env::var("PEEPHOLE_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_owned());

    let root = Arc::new(model::sample());
    let ticker = tokio::spawn(model::run_ticker(Arc::clone(&root), TICK_INTERVAL));

    let mount = Mount::new(prefix, root)?;
    info!(
        prefix = mount.prefix(),
        host = %config.host,
        port = config.port,
        verbose = config.verbose,
        "Configuration loaded"
    );

    let result = start_server(&config, vec![mount]).await;
    ticker.abort();
    result?;
    Ok(())
}
