//! Card API Client Module
//!
//! Builds upstream card-search requests and validates what comes back:
//! final status must be a success, the declared content type must be JSON
//! (an HTML error page behind a 200 is rejected), and the body must parse.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::upstream::fetcher::{fetch_with_retry, DEFAULT_MAX_ATTEMPTS};

// == Constants ==
/// User-Agent sent on every upstream request
const APP_USER_AGENT: &str = "Mozilla/5.0 Pokemon TCG Market App";

/// Header carrying the upstream API key, when one is configured
const API_KEY_HEADER: &str = "X-Api-Key";

/// Per-attempt timeout; exceeding it counts as a transport fault
const PER_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(60);

// == Card API Client ==
/// Client for the upstream card-search endpoint.
#[derive(Debug, Clone)]
pub struct CardApiClient {
    /// Shared HTTP client carrying the per-attempt timeout
    http: Client,
    /// Base URL of the card-search endpoint
    base_url: String,
    /// Headers sent with every request
    headers: HeaderMap,
}

impl CardApiClient {
    // == Constructor ==
    /// Creates a client for the configured upstream endpoint.
    ///
    /// The API-key header is attached only when a key is configured.
    pub fn new(config: &Config) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            match HeaderValue::from_str(key) {
                Ok(value) => {
                    headers.insert(API_KEY_HEADER, value);
                }
                Err(_) => warn!("API key contains invalid header characters, ignoring it"),
            }
        }

        let http = Client::builder()
            .timeout(PER_ATTEMPT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: config.upstream_url.clone(),
            headers,
        }
    }

    // == Search Cards ==
    /// Fetches a card search from the upstream, with retries.
    ///
    /// `raw_query` is the incoming query string verbatim; it is appended
    /// to the base URL unchanged so the upstream sees exactly what the
    /// client sent.
    pub async fn search_cards(&self, raw_query: &str) -> Result<Value> {
        let url = if raw_query.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, raw_query)
        };

        let response =
            fetch_with_retry(&self.http, &url, self.headers.clone(), DEFAULT_MAX_ATTEMPTS).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            return Err(ProxyError::NotJson);
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
