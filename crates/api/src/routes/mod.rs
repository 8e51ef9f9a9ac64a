//! Route definitions.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{legacy, playground};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Modern API:
///
/// ```text
/// GET    /api/playgrounds?q=Q     search
/// POST   /api/playground          create
/// GET    /api/playground/{slug}   get_by_slug
/// PUT    /api/playground/{slug}   update
/// ```
///
/// Legacy API (explicit version snapshots, `{item, contents}` bodies):
///
/// ```text
/// POST   /api                     create (version 0)
/// GET    /api/{id}                get_playground (version 0)
/// POST   /api/{id}                create_version
/// GET    /api/{id}/{version}      get_version
/// ```
///
/// Paths are registered in full rather than nested: the legacy surface
/// lives at `/api` itself, and the static `playground` segment takes
/// precedence over the `{id}` capture.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/playgrounds", get(playground::search))
        .route("/api/playground", post(playground::create))
        .route(
            "/api/playground/{slug}",
            get(playground::get_by_slug).put(playground::update),
        )
        .route("/api", post(legacy::create))
        .route(
            "/api/{id}",
            get(legacy::get_playground).post(legacy::create_version),
        )
        .route("/api/{id}/{version}", get(legacy::get_version))
}
