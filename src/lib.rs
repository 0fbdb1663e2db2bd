//! TCG Market - Backend for a trading-card marketplace client
//!
//! Proxies card searches to the upstream card API with caching and retry,
//! and keeps per-user favorites and price alerts in memory.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod stores;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
