//! Axum router construction for the inspection endpoints.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, MountState};
use crate::mount::{Mount, MountError};

/// Build the router serving every mount.
///
/// Each mount registers two routes:
/// - `GET {prefix}` -- the view of the root itself
/// - `GET {prefix}{*path}` -- the view of the value at `path`
///
/// # Errors
///
/// Returns [`MountError::Overlapping`] if two prefixes are equal or one
/// lies under the other.
pub fn build_router(mounts: Vec<Mount>, verbose: bool) -> Result<Router, MountError> {
    let mut router = Router::new();
    let mut seen: Vec<Mount> = Vec::with_capacity(mounts.len());

    for mount in mounts {
        if let Some(other) = seen.iter().find(|other| mount.overlaps(other)) {
            return Err(MountError::Overlapping {
                prefix: mount.prefix().to_owned(),
                other: other.prefix().to_owned(),
            });
        }

        let state = Arc::new(MountState::new(&mount, verbose));
        let wildcard = format!("{}{{*path}}", mount.prefix());
        router = router.merge(
            Router::new()
                .route(mount.prefix(), get(handlers::inspect_root))
                .route(&wildcard, get(handlers::inspect_path))
                .with_state(state),
        );
        seen.push(mount);
    }

    Ok(router.layer(TraceLayer::new_for_http()))
}
