//! API Module
//!
//! HTTP handlers and routing for the marketplace REST API.
//!
//! # Endpoints
//! - `GET /api/cards` - Proxy a card search upstream (cached)
//! - `GET|POST /api/favorites`, `GET|DELETE /api/favorites/:cardId`
//! - `GET|POST /api/price-alerts`, `PUT|DELETE /api/price-alerts/:alertId`
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
