//! Upstream Module
//!
//! Outbound side of the card proxy: the retry fetcher and the card-search
//! API client built on top of it.

pub mod client;
pub mod fetcher;

pub use client::CardApiClient;
pub use fetcher::{fetch_with_retry, DEFAULT_MAX_ATTEMPTS};
