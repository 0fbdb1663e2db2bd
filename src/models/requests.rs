//! Request DTOs for the marketplace API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Request body for adding a favorite (POST /api/favorites)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    /// Owning user
    pub user_id: String,
    /// Card identifier as known upstream
    pub card_id: String,
    /// Card payload to echo back on listing
    #[serde(default)]
    pub card_data: Value,
}

impl AddFavoriteRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.user_id.is_empty() {
            return Some("userId cannot be empty".to_string());
        }
        if self.card_id.is_empty() {
            return Some("cardId cannot be empty".to_string());
        }
        None
    }
}

/// Request body for creating a price alert (POST /api/price-alerts)
///
/// Only `userId` and `enabled` are fixed; every other field the caller
/// sends is captured in `fields` and stored verbatim on the alert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    /// Owning user
    pub user_id: String,
    /// Whether the alert starts active (defaults to true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Caller-supplied alert fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn default_enabled() -> bool {
    true
}

/// Request body for toggling an alert (PUT /api/price-alerts/:alertId)
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleAlertRequest {
    /// New value for the alert's enabled flag
    pub enabled: bool,
}

/// Query string identifying the requesting user (?userId=)
///
/// A missing userId behaves like an unknown user rather than a request
/// error, so listings simply come back empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    #[serde(default)]
    pub user_id: String,
}
