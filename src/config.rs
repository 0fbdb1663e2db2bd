//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default upstream card-search endpoint (Pokémon TCG API v2).
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.pokemontcg.io/v2/cards";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Optional upstream API key; requests carry no key header when unset
    pub api_key: Option<String>,
    /// Base URL of the upstream card-search endpoint
    pub upstream_url: String,
    /// TTL in seconds for cached upstream responses
    pub cache_ttl: u64,
    /// Maximum number of cached responses (FIFO-evicted beyond this)
    pub cache_capacity: usize,
    /// Directory the client bundle is served from
    pub static_dir: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `POKEMON_TCG_API_KEY` - Upstream API key (default: unset)
    /// - `UPSTREAM_URL` - Upstream card endpoint (default: Pokémon TCG API v2)
    /// - `CACHE_TTL` - Response cache TTL in seconds (default: 300)
    /// - `CACHE_CAPACITY` - Maximum cached responses (default: 100)
    /// - `STATIC_DIR` - Client bundle directory (default: "public")
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_key: env::var("POKEMON_TCG_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            upstream_url: env::var("UPSTREAM_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            static_dir: env::var("STATIC_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "public".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            cache_ttl: 300,
            cache_capacity: 100,
            static_dir: "public".to_string(),
        }
    }
}
