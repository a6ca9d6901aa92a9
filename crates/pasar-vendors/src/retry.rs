//! Exponential back-off with jitter for vendor feed requests.
//!
//! Only transient failures are retried. A body that does not parse, a body
//! that is not a collection, or a 4xx answer will not change on a second
//! attempt, so those are returned at once.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;

/// Upper bound on a single back-off sleep.
const MAX_DELAY_MS: u64 = 30_000;

/// Returns `true` for errors worth retrying after a delay.
///
/// **Retriable:** network timeouts and connection failures, HTTP 429, and
/// HTTP 5xx.
pub(crate) fn is_retriable(err: &FetchError) -> bool {
    match err {
        FetchError::Http(e) => e.is_timeout() || e.is_connect(),
        FetchError::UnexpectedStatus { status, .. } => *status == 429 || (500..600).contains(status),
        FetchError::Deserialize { .. }
        | FetchError::NotACollection { .. }
        | FetchError::NotConfigured { .. }
        | FetchError::InvalidUrl { .. } => false,
    }
}

/// Delay before retry number `attempt` (1-based), before jitter.
fn backoff_delay_ms(backoff_base_ms: u64, attempt: u32) -> u64 {
    backoff_base_ms
        .saturating_mul(1u64 << attempt.saturating_sub(1).min(16))
        .min(MAX_DELAY_MS)
}

/// Runs `operation`, retrying transient failures up to `max_retries` times.
///
/// With `backoff_base_ms = 250` the sleeps are roughly 250 ms, 500 ms,
/// 1 s, ... each scaled by a random factor in `[0.75, 1.25)` and capped at
/// 30 s. `max_retries = 0` makes exactly one attempt.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let capped = backoff_delay_ms(backoff_base_ms, attempt);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient vendor feed error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
