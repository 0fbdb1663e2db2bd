//! API Routes
//!
//! Configures the Axum router with all marketplace endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    add_favorite_handler, check_favorite_handler, create_alert_handler, health_handler,
    list_alerts_handler, list_favorites_handler, remove_alert_handler, remove_favorite_handler,
    search_cards_handler, toggle_alert_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/cards` - Proxy a card search upstream (cached)
/// - `GET /api/favorites` - List a user's favorites
/// - `POST /api/favorites` - Add a favorite
/// - `GET /api/favorites/:cardId` - Check a favorite
/// - `DELETE /api/favorites/:cardId` - Remove a favorite
/// - `GET /api/price-alerts` - List a user's price alerts
/// - `POST /api/price-alerts` - Create a price alert
/// - `PUT /api/price-alerts/:alertId` - Toggle a price alert
/// - `DELETE /api/price-alerts/:alertId` - Remove a price alert
/// - `GET /health` - Health check endpoint
///
/// Unmatched paths fall back to static file serving of the client bundle.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/cards", get(search_cards_handler))
        .route(
            "/api/favorites",
            get(list_favorites_handler).post(add_favorite_handler),
        )
        .route(
            "/api/favorites/:card_id",
            get(check_favorite_handler).delete(remove_favorite_handler),
        )
        .route(
            "/api/price-alerts",
            get(list_alerts_handler).post(create_alert_handler),
        )
        .route(
            "/api/price-alerts/:alert_id",
            put(toggle_alert_handler).delete(remove_alert_handler),
        )
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
