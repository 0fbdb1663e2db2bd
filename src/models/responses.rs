//! Response DTOs for the marketplace API
//!
//! Defines the structure of outgoing HTTP response bodies. Bookkeeping
//! endpoints answer with the `ApiResponse` envelope; proxy failures use the
//! degraded `ErrorEnvelope` so the client always receives renderable JSON.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Uniform envelope for favorites and price-alert endpoints.
///
/// Business "not found"/"already exists" outcomes are expressed through
/// `success:false` with a message, still delivered as HTTP 200.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload, omitted when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Success with a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Success without a payload (deletions)
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    /// Business failure with a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Existence check: success mirrors whether the payload was found
    pub fn found(data: Option<T>) -> Self {
        Self {
            success: data.is_some(),
            data,
            message: None,
        }
    }
}

/// Degraded response body for proxy failures (status 500).
///
/// Carries empty-state defaults so a naive client can render an empty
/// result list without special-casing errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    /// Fixed error category
    pub error: String,
    /// Specific failure description
    pub message: String,
    /// Always empty
    pub data: Vec<Value>,
    /// Always zero
    pub count: u64,
    /// Always zero
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

impl ErrorEnvelope {
    /// Creates the degraded envelope for a failed card fetch
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            error: "Failed to fetch cards".to_string(),
            message: message.into(),
            data: Vec::new(),
            count: 0,
            total_count: 0,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Response-cache statistics
    pub cache: CacheStats,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(cache: CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache,
        }
    }
}
