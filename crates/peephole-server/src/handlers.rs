//! Request handlers for mounted object graphs.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `{prefix}` | View of the mounted root |
//! | `GET` | `{prefix}{*path}` | View of the value at `path` |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;
use peephole_core::{render, split_path};
use peephole_types::{Inspect, RenderError, RequestContext};
use tracing::{debug, info_span, warn, Instrument, Span};

use crate::error::InspectError;
use crate::mount::Mount;

/// Per-mount state shared by the two routes of one mount.
pub struct MountState {
    prefix: String,
    root: Arc<dyn Inspect + Send + Sync>,
    verbose: bool,
}

impl MountState {
    /// Capture `mount` and the verbosity flag for its handlers.
    pub fn new(mount: &Mount, verbose: bool) -> Self {
        Self {
            prefix: mount.prefix().to_owned(),
            root: Arc::clone(mount.root()),
            verbose,
        }
    }
}

/// `GET {prefix}` -- render the mounted root.
pub async fn inspect_root(
    State(state): State<Arc<MountState>>,
    uri: Uri,
) -> Result<Html<Vec<u8>>, InspectError> {
    inspect(state, &uri, String::new()).await
}

/// `GET {prefix}{*path}` -- render the value the path addresses.
///
/// The wildcard arrives percent-decoded.
pub async fn inspect_path(
    State(state): State<Arc<MountState>>,
    uri: Uri,
    Path(suffix): Path<String>,
) -> Result<Html<Vec<u8>>, InspectError> {
    inspect(state, &uri, suffix).await
}

async fn inspect(
    state: Arc<MountState>,
    uri: &Uri,
    suffix: String,
) -> Result<Html<Vec<u8>>, InspectError> {
    let ctx = RequestContext::new(uri.path(), state.prefix.as_str()).with_verbose(state.verbose);
    let request_id = ctx.request_id();
    let span = info_span!("inspect", %request_id, path = %uri.path());

    async move {
        let span = Span::current();
        let rendered = tokio::task::spawn_blocking(move || {
            span.in_scope(|| render_page(&state, &suffix, &ctx))
        })
        .await;
        match rendered {
            Ok(Ok(body)) => {
                debug!(bytes = body.len(), "rendered view");
                Ok(Html(body))
            }
            Ok(Err(e)) => {
                warn!(%request_id, error = %e, "render failed");
                Err(InspectError::Render(e))
            }
            Err(e) => {
                warn!(%request_id, error = %e, "render task failed");
                Err(InspectError::Task(e.to_string()))
            }
        }
    }
    .instrument(span)
    .await
}

/// Render the view addressed by `suffix` into a buffer.
///
/// Nothing reaches the client until the whole view has rendered, so a
/// failure part-way never produces a truncated page.
fn render_page(
    state: &MountState,
    suffix: &str,
    ctx: &RequestContext,
) -> Result<Vec<u8>, RenderError> {
    let segments = split_path(suffix);
    let mut body = Vec::new();
    render(&*state.root, &state.prefix, &segments, ctx, &mut body)?;
    Ok(body)
}
