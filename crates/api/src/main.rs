use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playground_api::config::ServerConfig;
use playground_api::purge::CachePurger;
use playground_api::router::build_app_router;
use playground_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "configuration loaded");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = playground_db::create_pool(&database_url)
        .await
        .expect("database connection failed");

    playground_db::health_check(&pool)
        .await
        .expect("database health check failed");

    playground_db::run_migrations(&pool)
        .await
        .expect("migration run failed");
    tracing::info!("database ready, migrations applied");

    let purger = Arc::new(CachePurger::from_config(&config));
    if config.cache_purge_url.is_none() {
        tracing::info!("CACHE_PURGE_URL unset, cache purge disabled");
    }

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        purger,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    // In-flight requests have finished by this point; release the pool's
    // connections, bounded so a wedged connection cannot hang shutdown.
    tracing::info!("draining database pool");
    let _ = tokio::time::timeout(
        Duration::from_secs(config.shutdown_timeout_secs),
        pool.close(),
    )
    .await;

    tracing::info!("shutdown complete");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playground_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve when the process is asked to stop: SIGINT from a terminal, or
/// SIGTERM from a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
