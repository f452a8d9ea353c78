//! Per-request error type for the inspection endpoints.
//!
//! [`InspectError`] converts into an HTTP 500 carrying a one-line
//! plain-text reason. Full details are logged by the handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use peephole_types::RenderError;

/// A request that could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// The dispatcher, a template, or a capability returned an error.
    #[error("{0}")]
    Render(#[from] RenderError),

    /// The render task panicked or was cancelled.
    #[error("render task failed: {0}")]
    Task(String),
}

impl IntoResponse for InspectError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
