use pagepeek_resolver::Resolver;

use crate::config::ServerConfig;

/// Shared application state: just the resolver and its connection pool.
pub struct AppState {
    pub resolver: Resolver,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            resolver: Resolver::with_timeout(config.resolve_timeout)
                .with_max_redirects(config.max_redirects),
        }
    }
}
