//! Stores Module
//!
//! In-memory bookkeeping stores for favorites and price alerts. State lives
//! for the server's lifetime; there is no persistence.

pub mod alerts;
pub mod favorites;

pub use alerts::{PriceAlert, PriceAlertStore};
pub use favorites::{Favorite, FavoritesStore};
