//! Server configuration, loaded from environment variables with defaults.

use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Total budget for one resolution, redirects included.
    pub resolve_timeout: Duration,
    /// Redirect hops followed before giving up on a target.
    pub max_redirects: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`)
    /// - `PAGEPEEK_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `PAGEPEEK_LOG_LEVEL` — log filter (default: `info`)
    /// - `PAGEPEEK_TIMEOUT_SECS` — resolution budget in seconds (default: `15`)
    /// - `PAGEPEEK_MAX_REDIRECTS` — redirect hop bound (default: `10`)
    #[must_use]
    pub fn from_env() -> Self {
        let bind_addr = if let Ok(addr) = std::env::var("PAGEPEEK_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3000)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(3000);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 3000))
        };

        let log_level = std::env::var("PAGEPEEK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let resolve_timeout = std::env::var("PAGEPEEK_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map_or(Duration::from_secs(15), Duration::from_secs);

        let max_redirects = std::env::var("PAGEPEEK_MAX_REDIRECTS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(10);

        Self {
            bind_addr,
            log_level,
            resolve_timeout,
            max_redirects,
        }
    }
}
