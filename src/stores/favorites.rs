//! Favorites Store Module
//!
//! Per-user favorite cards, held in process memory for the lifetime of the
//! server. At most one favorite exists per (userId, cardId) pair.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

// == Favorite ==
/// A card a user has marked as favorite.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Store-assigned identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Card identifier as known upstream
    pub card_id: String,
    /// Card payload as supplied by the client, echoed back verbatim
    pub card_data: Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

// == Favorites Store ==
/// Unbounded in-memory list of favorites.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    items: Vec<Favorite>,
    next_id: u64,
}

impl FavoritesStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    // == Add ==
    /// Adds a favorite unless the (userId, cardId) pair already exists.
    ///
    /// Returns the created favorite, or None on a duplicate.
    pub fn add(&mut self, user_id: &str, card_id: &str, card_data: Value) -> Option<Favorite> {
        if self.find(user_id, card_id).is_some() {
            return None;
        }

        let favorite = Favorite {
            id: self.next_id.to_string(),
            user_id: user_id.to_string(),
            card_id: card_id.to_string(),
            card_data,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.items.push(favorite.clone());
        Some(favorite)
    }

    // == List ==
    /// Returns all favorites belonging to `user_id`.
    pub fn list(&self, user_id: &str) -> Vec<Favorite> {
        self.items
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect()
    }

    // == Find ==
    /// Looks up a favorite by its composite key.
    pub fn find(&self, user_id: &str, card_id: &str) -> Option<Favorite> {
        self.items
            .iter()
            .find(|f| f.user_id == user_id && f.card_id == card_id)
            .cloned()
    }

    // == Remove ==
    /// Removes a favorite by its composite key. Returns true if one existed.
    pub fn remove(&mut self, user_id: &str, card_id: &str) -> bool {
        let before = self.items.len();
        self.items
            .retain(|f| !(f.user_id == user_id && f.card_id == card_id));
        self.items.len() < before
    }

    // == Length ==
    /// Returns the total number of favorites across all users.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no favorites are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_and_list() {
        let mut store = FavoritesStore::new();

        let fav = store
            .add("user1", "xy1-1", json!({"name": "Venusaur-EX"}))
            .unwrap();
        assert_eq!(fav.user_id, "user1");
        assert_eq!(fav.card_id, "xy1-1");

        let listed = store.list("user1");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].card_data["name"], "Venusaur-EX");
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut store = FavoritesStore::new();

        assert!(store.add("user1", "xy1-1", json!({})).is_some());
        assert!(store.add("user1", "xy1-1", json!({})).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_card_different_users_allowed() {
        let mut store = FavoritesStore::new();

        assert!(store.add("user1", "xy1-1", json!({})).is_some());
        assert!(store.add("user2", "xy1-1", json!({})).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_filters_by_user() {
        let mut store = FavoritesStore::new();

        store.add("user1", "a", json!({}));
        store.add("user2", "b", json!({}));
        store.add("user1", "c", json!({}));

        assert_eq!(store.list("user1").len(), 2);
        assert_eq!(store.list("user2").len(), 1);
        assert!(store.list("user3").is_empty());
    }

    #[test]
    fn test_remove_existing() {
        let mut store = FavoritesStore::new();

        store.add("user1", "xy1-1", json!({}));
        assert!(store.remove("user1", "xy1-1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_pair() {
        let mut store = FavoritesStore::new();

        store.add("user1", "xy1-1", json!({}));
        // Wrong user for that card
        assert!(!store.remove("user2", "xy1-1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = FavoritesStore::new();

        let a = store.add("user1", "a", json!({})).unwrap();
        let b = store.add("user1", "b", json!({})).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut store = FavoritesStore::new();
        let fav = store.add("user1", "xy1-1", json!({})).unwrap();

        let json = serde_json::to_value(&fav).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("cardId").is_some());
        assert!(json.get("cardData").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
