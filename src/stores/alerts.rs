//! Price-Alert Store Module
//!
//! Per-user price alerts. Beyond the bookkeeping fields the alert schema is
//! open: whatever fields the caller supplies (card name, target price,
//! direction, ...) are carried and echoed back verbatim.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

// == Price Alert ==
/// A user's price alert. `fields` holds the caller-supplied alert data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    /// Store-assigned identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Whether the alert is active
    pub enabled: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Caller-supplied alert fields, flattened into the JSON object
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

// == Price-Alert Store ==
/// Unbounded in-memory list of price alerts.
#[derive(Debug, Default)]
pub struct PriceAlertStore {
    items: Vec<PriceAlert>,
    next_id: u64,
}

impl PriceAlertStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    // == Add ==
    /// Creates an alert for `user_id` with the supplied open fields.
    ///
    /// No uniqueness constraint applies beyond the assigned id.
    pub fn add(&mut self, user_id: &str, enabled: bool, fields: Map<String, Value>) -> PriceAlert {
        let alert = PriceAlert {
            id: self.next_id.to_string(),
            user_id: user_id.to_string(),
            enabled,
            created_at: Utc::now(),
            fields,
        };
        self.next_id += 1;
        self.items.push(alert.clone());
        alert
    }

    // == List ==
    /// Returns all alerts belonging to `user_id`.
    pub fn list(&self, user_id: &str) -> Vec<PriceAlert> {
        self.items
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }

    // == Remove ==
    /// Removes an alert by owner and id. Returns true if one existed.
    pub fn remove(&mut self, user_id: &str, alert_id: &str) -> bool {
        let before = self.items.len();
        self.items
            .retain(|a| !(a.user_id == user_id && a.id == alert_id));
        self.items.len() < before
    }

    // == Set Enabled ==
    /// Toggles an alert's `enabled` flag.
    ///
    /// Returns the updated alert, or None if no alert matches the owner
    /// and id.
    pub fn set_enabled(&mut self, user_id: &str, alert_id: &str, enabled: bool) -> Option<PriceAlert> {
        let alert = self
            .items
            .iter_mut()
            .find(|a| a.user_id == user_id && a.id == alert_id)?;
        alert.enabled = enabled;
        Some(alert.clone())
    }

    // == Length ==
    /// Returns the total number of alerts across all users.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no alerts are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
