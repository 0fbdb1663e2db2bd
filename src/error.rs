//! Error types for the marketplace server
//!
//! Provides unified error handling using thiserror.
//!
//! Every proxy failure is converted into a "degraded response": a valid
//! JSON envelope with empty defaults so the client can render an empty
//! state, delivered with status 500. Transport-level failures never
//! propagate past the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorEnvelope;

// == Proxy Error Enum ==
/// Unified error type for the upstream card proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// All retry attempts exhausted on transport faults (connect, timeout)
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Upstream returned a non-success status on the final attempt
    #[error("API returned {status}: {status_text}")]
    UpstreamStatus { status: u16, status_text: String },

    /// Upstream answered with a success status but non-JSON content,
    /// typically an HTML error page behind a 200
    #[error("API did not return JSON")]
    NotJson,

    /// Upstream body was not valid JSON
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        // Uniform degraded envelope: the client always receives valid JSON
        // with empty-state defaults, whatever went wrong upstream.
        let body = Json(ErrorEnvelope::degraded(self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for proxy operations.
pub type Result<T> = std::result::Result<T, ProxyError>;
