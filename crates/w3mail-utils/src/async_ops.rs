//! Async operation wrappers: timeouts and retries.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Awaits `future`, failing with `Error::Timeout` after `duration`.
///
/// # Errors
///
/// Returns `Error::Timeout` if the future does not complete in time.
pub async fn with_timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output> {
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_| Error::Timeout(duration))
}

/// Sleeps for `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Exponential backoff settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first (minimum 1).
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub initial_delay_ms: u64,
    /// Upper bound for any delay, in milliseconds.
    pub max_delay_ms: u64,
    /// Multiplier applied to the delay after each failure.
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 200,
            max_delay_ms: 5_000,
            backoff_factor: 2.0,
        }
    }
}

impl RetryConfig {
    /// Creates a config with `max_attempts` and default delays.
    #[must_use]
    pub fn with_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap
    )]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(64) as i32;
        let factor = self.backoff_factor.max(1.0).powi(exponent);
        let delay = (self.initial_delay_ms as f64 * factor).min(self.max_delay_ms as f64);
        Duration::from_millis(delay as u64)
    }
}

/// Runs `op` until it succeeds or `config.max_attempts` is reached.
///
/// `op` receives the 1-based attempt number.
///
/// # Errors
///
/// Returns `Error::RetryExhausted` carrying the last failure message.
pub async fn retry<T, E, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) if attempt >= max_attempts => {
                warn!(attempt, error = %err, "Operation failed, giving up");
                return Err(Error::RetryExhausted {
                    attempts: attempt,
                    last_error: err.to_string(),
                });
            }
            Err(err) => {
                let delay = config.delay_for(attempt);
                warn!(attempt, error = %err, ?delay, "Operation failed, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn backoff_grows_and_caps() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for(1), Duration::from_millis(200));
        assert_eq!(config.delay_for(2), Duration::from_millis(400));
        assert_eq!(config.delay_for(3), Duration::from_millis(800));
        assert_eq!(config.delay_for(10), Duration::from_millis(5_000));
    }

    #[test]
    fn config_defaults_from_partial_json() {
        let config: RetryConfig = serde_json::from_str(r#"{"max_attempts": 5}"#).unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.initial_delay_ms, 200);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_fires() {
        let result = with_timeout(Duration::from_millis(50), sleep_ms(1_000)).await;
        assert!(matches!(result, Err(Error::Timeout(d)) if d == Duration::from_millis(50)));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_passes_value_through() {
        let result = with_timeout(Duration::from_secs(1), async { 7 }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let result = retry(&RetryConfig::with_attempts(5), move |attempt| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                if attempt < 3 { Err("not yet") } else { Ok(attempt) }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_gives_up() {
        let result: Result<()> =
            retry(&RetryConfig::with_attempts(2), |_| async { Err("boom") }).await;
        match result {
            Err(Error::RetryExhausted {
                attempts,
                last_error,
            }) => {
                assert_eq!(attempts, 2);
                assert_eq!(last_error, "boom");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_runs_once() {
        let result = retry(&RetryConfig::with_attempts(0), |_| async {
            Ok::<_, String>("done")
        })
        .await;
        assert_eq!(result.unwrap(), "done");
    }
}
