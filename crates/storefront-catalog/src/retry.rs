//! Retry with exponential back-off for catalog fetches.
//!
//! Retryable failures (see [`CatalogError::is_retryable`]) are re-attempted
//! sequentially; terminal failures are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Upper bound on any single back-off sleep.
const MAX_DELAY_MS: u64 = 60_000;

/// Delay to sleep after the `attempt`-th (1-based) failed attempt.
///
/// `backoff_base_ms * 2^(attempt - 1)`, capped at [`MAX_DELAY_MS`].
pub(crate) fn backoff_delay_ms(backoff_base_ms: u64, attempt: u32) -> u64 {
    let exponent = attempt.saturating_sub(1).min(62);
    backoff_base_ms
        .saturating_mul(1u64 << exponent)
        .min(MAX_DELAY_MS)
}

/// Runs `operation` up to `max_attempts` times in total.
///
/// # Backoff schedule (example with `backoff_base_ms = 1_000`, `max_attempts = 3`)
///
/// | Attempt | Sleep after a retryable failure |
/// |---------|---------------------------------|
/// | 1       | 1 000 ms × 2⁰ = 1 s             |
/// | 2       | 1 000 ms × 2¹ = 2 s             |
/// | 3       | none, the last error is returned |
///
/// A `max_attempts` of 0 is treated as 1. Once a sleep has started it runs to
/// completion; callers can only drop the returned future.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !err.is_retryable() || attempt >= max_attempts {
                    return Err(err);
                }
                let delay_ms = backoff_delay_ms(backoff_base_ms, attempt);
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms,
                    error = %err,
                    "catalog request failed, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                attempt += 1;
            }
        }
    }
}
