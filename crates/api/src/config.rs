//! Environment-driven server configuration.

/// Runtime configuration for the API server.
///
/// Every field carries a development-friendly default; deployments
/// override through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Allowed CORS origins, comma-separated in the env var.
    pub cors_origins: Vec<String>,
    /// Per-request timeout enforced by the middleware stack, in seconds.
    pub request_timeout_secs: u64,
    /// Bound on the shutdown pool drain, in seconds.
    pub shutdown_timeout_secs: u64,
    /// Public host whose cached playground URLs are purged after updates.
    pub public_host: String,
    /// Endpoint of the external cache purge service. Purging is disabled
    /// when unset.
    pub cache_purge_url: Option<String>,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `PLAYGROUND_PUBLIC_HOST`| `pixiplayground.com`    |
    /// | `CACHE_PURGE_URL`       | unset (purge disabled)  |
    ///
    /// A present-but-malformed value panics: starting with a half-applied
    /// configuration is worse than not starting.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parsed_env("PORT", 3000),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            request_timeout_secs: parsed_env("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: parsed_env("SHUTDOWN_TIMEOUT_SECS", 30),
            public_host: env_or("PLAYGROUND_PUBLIC_HOST", "pixiplayground.com"),
            cache_purge_url: std::env::var("CACHE_PURGE_URL")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_env<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("invalid {name} value '{raw}': {e}")),
        Err(_) => default,
    }
}
