use std::sync::Arc;

use crate::config::ServerConfig;
use crate::purge::CachePurger;

/// Process-wide resources, constructed once in `main` and handed to every
/// handler through axum's `State` extractor.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// rest sits behind `Arc`. Nothing here is reachable as an ambient
/// singleton.
#[derive(Clone)]
pub struct AppState {
    pub pool: playground_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub purger: Arc<CachePurger>,
}
