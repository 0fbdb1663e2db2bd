//! API Handlers
//!
//! HTTP request handlers for each marketplace endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, RawQuery, State},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    AddFavoriteRequest, ApiResponse, CreateAlertRequest, HealthResponse, ToggleAlertRequest,
    UserQuery,
};
use crate::stores::{Favorite, FavoritesStore, PriceAlert, PriceAlertStore};
use crate::upstream::CardApiClient;

/// Application state shared across all handlers.
///
/// The response cache and both bookkeeping stores live here for the
/// process lifetime, each behind Arc<RwLock<>> for shared access. No lock
/// is ever held across an outbound fetch.
#[derive(Clone)]
pub struct AppState {
    /// Memoized upstream responses
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Per-user favorite cards
    pub favorites: Arc<RwLock<FavoritesStore>>,
    /// Per-user price alerts
    pub alerts: Arc<RwLock<PriceAlertStore>>,
    /// Upstream card-search client
    pub client: CardApiClient,
}

impl AppState {
    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            cache: Arc::new(RwLock::new(ResponseCache::new(
                config.cache_capacity,
                Duration::from_secs(config.cache_ttl),
            ))),
            favorites: Arc::new(RwLock::new(FavoritesStore::new())),
            alerts: Arc::new(RwLock::new(PriceAlertStore::new())),
            client: CardApiClient::new(config),
        }
    }
}

// == Card Proxy ==

/// Handler for GET /api/cards
///
/// Serves card searches from the response cache when possible, otherwise
/// proxies to the upstream API with retry. The raw query string, in the
/// order the client sent it, is both the cache key and the upstream query.
///
/// Any proxy failure converts into the degraded 500 envelope via
/// `ProxyError::into_response`; callers always receive valid JSON.
pub async fn search_cards_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>> {
    let key = query.unwrap_or_default();

    // Cache hit short-circuits all network activity
    {
        let mut cache = state.cache.write().await;
        if let Some(payload) = cache.lookup(&key) {
            info!(key, "serving card search from cache");
            return Ok(Json(payload));
        }
    }

    // Lock released while the fetch (and any backoff) is in flight
    let payload = state.client.search_cards(&key).await?;

    let count = payload.get("count").and_then(Value::as_u64).unwrap_or(0);
    info!(key, count, "card search fetched from upstream");

    state.cache.write().await.store(key, payload.clone());
    Ok(Json(payload))
}

// == Favorites ==

/// Handler for GET /api/favorites?userId=
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Json<ApiResponse<Vec<Favorite>>> {
    let favorites = state.favorites.read().await;
    Json(ApiResponse::ok(favorites.list(&query.user_id)))
}

/// Handler for POST /api/favorites
///
/// Adds a favorite unless the (userId, cardId) pair already exists.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Json(req): Json<AddFavoriteRequest>,
) -> Json<ApiResponse<Favorite>> {
    if let Some(error_msg) = req.validate() {
        return Json(ApiResponse::failure(error_msg));
    }

    let mut favorites = state.favorites.write().await;
    match favorites.add(&req.user_id, &req.card_id, req.card_data) {
        Some(favorite) => Json(ApiResponse::ok(favorite)),
        None => Json(ApiResponse::failure("Already in favorites")),
    }
}

/// Handler for DELETE /api/favorites/:cardId?userId=
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Query(query): Query<UserQuery>,
) -> Json<ApiResponse<Favorite>> {
    let mut favorites = state.favorites.write().await;
    if favorites.remove(&query.user_id, &card_id) {
        Json(ApiResponse::ok_empty())
    } else {
        Json(ApiResponse::failure("Favorite not found"))
    }
}

/// Handler for GET /api/favorites/:cardId?userId=
///
/// Existence check: `success` mirrors whether the favorite was found and
/// `data` is omitted when absent.
pub async fn check_favorite_handler(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Query(query): Query<UserQuery>,
) -> Json<ApiResponse<Favorite>> {
    let favorites = state.favorites.read().await;
    Json(ApiResponse::found(favorites.find(&query.user_id, &card_id)))
}

// == Price Alerts ==

/// Handler for GET /api/price-alerts?userId=
pub async fn list_alerts_handler(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Json<ApiResponse<Vec<PriceAlert>>> {
    let alerts = state.alerts.read().await;
    Json(ApiResponse::ok(alerts.list(&query.user_id)))
}

/// Handler for POST /api/price-alerts
pub async fn create_alert_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> Json<ApiResponse<PriceAlert>> {
    let mut alerts = state.alerts.write().await;
    let alert = alerts.add(&req.user_id, req.enabled, req.fields);
    Json(ApiResponse::ok(alert))
}

/// Handler for DELETE /api/price-alerts/:alertId?userId=
pub async fn remove_alert_handler(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
    Query(query): Query<UserQuery>,
) -> Json<ApiResponse<PriceAlert>> {
    let mut alerts = state.alerts.write().await;
    if alerts.remove(&query.user_id, &alert_id) {
        Json(ApiResponse::ok_empty())
    } else {
        Json(ApiResponse::failure("Alert not found"))
    }
}

/// Handler for PUT /api/price-alerts/:alertId?userId=
///
/// Partial update: only the `enabled` flag changes.
pub async fn toggle_alert_handler(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
    Query(query): Query<UserQuery>,
    Json(req): Json<ToggleAlertRequest>,
) -> Json<ApiResponse<PriceAlert>> {
    let mut alerts = state.alerts.write().await;
    match alerts.set_enabled(&query.user_id, &alert_id, req.enabled) {
        Some(alert) => Json(ApiResponse::ok(alert)),
        None => Json(ApiResponse::failure("Alert not found")),
    }
}

// == Health ==

/// Handler for GET /health
///
/// Returns liveness plus response-cache statistics.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.cache.read().await;
    Json(HealthResponse::healthy(cache.stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default())
    }

    fn user_query(user_id: &str) -> Query<UserQuery> {
        Query(UserQuery {
            user_id: user_id.to_string(),
        })
    }

    #[tokio::test]
    async fn test_add_and_list_favorites() {
        let state = test_state();

        let req = AddFavoriteRequest {
            user_id: "user1".to_string(),
            card_id: "xy1-1".to_string(),
            card_data: json!({"name": "Venusaur-EX"}),
        };
        let response = add_favorite_handler(State(state.clone()), Json(req)).await;
        assert!(response.success);

        let response = list_favorites_handler(State(state), user_query("user1")).await;
        let data = response.0.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].card_id, "xy1-1");
    }

    #[tokio::test]
    async fn test_duplicate_favorite_rejected() {
        let state = test_state();

        let req = AddFavoriteRequest {
            user_id: "user1".to_string(),
            card_id: "xy1-1".to_string(),
            card_data: Value::Null,
        };
        add_favorite_handler(State(state.clone()), Json(req.clone())).await;
        let response = add_favorite_handler(State(state.clone()), Json(req)).await;

        assert!(!response.success);
        assert_eq!(response.0.message.as_deref(), Some("Already in favorites"));
        assert_eq!(state.favorites.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_favorite() {
        let state = test_state();

        let response = remove_favorite_handler(
            State(state),
            Path("nope".to_string()),
            user_query("user1"),
        )
        .await;

        assert!(!response.success);
        assert_eq!(response.0.message.as_deref(), Some("Favorite not found"));
    }

    #[tokio::test]
    async fn test_check_favorite_mirrors_presence() {
        let state = test_state();

        let req = AddFavoriteRequest {
            user_id: "user1".to_string(),
            card_id: "xy1-1".to_string(),
            card_data: Value::Null,
        };
        add_favorite_handler(State(state.clone()), Json(req)).await;

        let hit = check_favorite_handler(
            State(state.clone()),
            Path("xy1-1".to_string()),
            user_query("user1"),
        )
        .await;
        assert!(hit.success);
        assert!(hit.0.data.is_some());

        let miss = check_favorite_handler(
            State(state),
            Path("xy1-1".to_string()),
            user_query("user2"),
        )
        .await;
        assert!(!miss.success);
        assert!(miss.0.data.is_none());
    }

    #[tokio::test]
    async fn test_alert_lifecycle() {
        let state = test_state();

        let mut fields = serde_json::Map::new();
        fields.insert("cardName".to_string(), json!("Charizard"));
        let req = CreateAlertRequest {
            user_id: "user1".to_string(),
            enabled: true,
            fields,
        };
        let created = create_alert_handler(State(state.clone()), Json(req)).await;
        let alert_id = created.0.data.as_ref().unwrap().id.clone();

        let toggled = toggle_alert_handler(
            State(state.clone()),
            Path(alert_id.clone()),
            user_query("user1"),
            Json(ToggleAlertRequest { enabled: false }),
        )
        .await;
        assert!(toggled.success);
        assert!(!toggled.0.data.as_ref().unwrap().enabled);

        let removed = remove_alert_handler(
            State(state.clone()),
            Path(alert_id),
            user_query("user1"),
        )
        .await;
        assert!(removed.success);
        assert!(state.alerts.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_missing_alert() {
        let state = test_state();

        let response = toggle_alert_handler(
            State(state),
            Path("42".to_string()),
            user_query("user1"),
            Json(ToggleAlertRequest { enabled: true }),
        )
        .await;

        assert!(!response.success);
        assert_eq!(response.0.message.as_deref(), Some("Alert not found"));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = test_state();
        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
    }
}
