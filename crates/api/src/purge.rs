//! Cache invalidation notifier.
//!
//! After a successful update commit the affected slug's publicly cached
//! URL variants are purged through an external service. The call runs as
//! a detached task: its outcome never changes the response or rolls back
//! the transaction that triggered it.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Schemes under which playground pages are cached.
const SCHEMES: [&str; 2] = ["https", "http"];

/// Subdomain prefixes under which playground pages are cached.
const SUBDOMAINS: [&str; 2] = ["", "www."];

/// Requests purge of cached playground URLs, best-effort.
pub struct CachePurger {
    client: reqwest::Client,
    endpoint: Option<String>,
    public_host: String,
}

impl CachePurger {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.cache_purge_url.clone(),
            public_host: config.public_host.clone(),
        }
    }

    /// The cacheable URL variants for a slug: every scheme × subdomain
    /// combination on the public host.
    fn urls_for_slug(&self, slug: &str) -> Vec<String> {
        let mut urls = Vec::with_capacity(SCHEMES.len() * SUBDOMAINS.len());
        for scheme in SCHEMES {
            for subdomain in SUBDOMAINS {
                urls.push(format!(
                    "{scheme}://{subdomain}{}/playground/{slug}",
                    self.public_host
                ));
            }
        }
        urls
    }

    /// Request invalidation of the cached URLs for `slug`.
    ///
    /// Spawns a detached task and returns immediately. Failures are
    /// logged and dropped. Does nothing when no endpoint is configured.
    pub fn purge_for_slug(self: &Arc<Self>, slug: &str) {
        let Some(endpoint) = self.endpoint.clone() else {
            tracing::debug!(slug, "cache purge disabled, skipping");
            return;
        };

        let purger = Arc::clone(self);
        let slug = slug.to_string();
        tokio::spawn(async move {
            let urls = purger.urls_for_slug(&slug);
            let body = serde_json::json!({ "files": urls });
            match purger.client.post(&endpoint).json(&body).send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::debug!(slug, "cache purge requested");
                }
                Ok(resp) => {
                    tracing::warn!(slug, status = %resp.status(), "cache purge rejected");
                }
                Err(err) => {
                    tracing::warn!(slug, error = %err, "cache purge failed");
                }
            }
        });
    }
}
