//! Retry Fetcher Module
//!
//! Issues outbound HTTP requests, retrying transient failures with linear
//! backoff. Server errors (5xx) and transport faults (connect failure,
//! per-attempt timeout) are transient; anything else is returned to the
//! caller on the first attempt.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use tracing::{info, warn};

// == Constants ==
/// Default number of attempts per logical fetch
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Backoff unit: the wait before attempt N+1 is `BACKOFF_UNIT * N`
/// (linear, 1s then 2s for the default three attempts)
const BACKOFF_UNIT: Duration = Duration::from_millis(1000);

// == Fetch With Retry ==
/// Performs a GET request with up to `max_attempts` tries.
///
/// Retry rules:
/// - A 5xx response is retried while attempts remain; on the final attempt
///   the failing response is returned as a value, not an error.
/// - A transport fault is retried the same way; a fault on the final
///   attempt propagates as the error.
/// - Any other status (2xx, 4xx, ...) is returned immediately.
///
/// Each wait is `1000ms * attempt_number` — linear backoff. The per-attempt
/// timeout is carried by the `Client` itself.
pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    headers: HeaderMap,
    max_attempts: u32,
) -> Result<Response, reqwest::Error> {
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;

    loop {
        info!(attempt, max_attempts, url, "fetching upstream");

        match client.get(url).headers(headers.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_server_error() && attempt < max_attempts {
                    warn!(status = %status, attempt, "retrying after server error");
                    tokio::time::sleep(BACKOFF_UNIT * attempt).await;
                    attempt += 1;
                    continue;
                }
                return Ok(response);
            }
            Err(err) => {
                if attempt < max_attempts {
                    warn!(error = %err, attempt, "retrying after transport fault");
                    tokio::time::sleep(BACKOFF_UNIT * attempt).await;
                    attempt += 1;
                    continue;
                }
                return Err(err);
            }
        }
    }
}
