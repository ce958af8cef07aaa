//! Fixed-delay retry for page fetches.
//!
//! Review pages are served behind aggressive CDN/anti-bot layers, so every
//! fetch failure — transport error or non-success status — is treated as
//! transient and retried. The delay between attempts is fixed; there is
//! deliberately no exponential backoff and no jitter, so callers must not
//! assume adaptive recovery.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Executes `operation` up to `attempts` times total, sleeping `delay_secs`
/// between failed attempts.
///
/// On success the result is returned immediately. Each failed attempt emits
/// one `tracing::warn` carrying the attempt index and the error. There is no
/// sleep after the final attempt; the last error is returned as-is.
///
/// `attempts` is the total try count: `attempts = 3` means at most 3 calls
/// and at most 2 sleeps. A value of 0 behaves like 1.
pub(crate) async fn retry_fixed_delay<T, F, Fut>(
    attempts: u32,
    delay_secs: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::warn!(attempt, attempts, error = %err, "fetch attempt failed");
                if attempt >= attempts {
                    return Err(err);
                }
                if delay_secs > 0 {
                    tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                }
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn status_error() -> ScraperError {
        ScraperError::UnexpectedStatus {
            status: 503,
            url: "https://reviews.example.com/review/acme".to_owned(),
        }
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_fixed_delay(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, ScraperError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_then_succeeds() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_fixed_delay(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                let n = cc.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(status_error())
                } else {
                    Ok::<u32, ScraperError>(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn propagates_last_error_after_exact_attempt_count() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_fixed_delay(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ScraperError>(status_error())
            }
        })
        .await;
        // attempts=3 → exactly 3 calls, then the final error propagates.
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
        assert!(matches!(
            result,
            Err(ScraperError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn sleeps_fixed_delay_between_attempts_but_not_after_final() {
        let start = tokio::time::Instant::now();
        let result = retry_fixed_delay(3, 5, || async {
            Err::<u32, ScraperError>(status_error())
        })
        .await;
        assert!(result.is_err());
        // 3 attempts → exactly 2 inter-attempt sleeps of 5 s each. A sleep
        // after the final attempt would advance the clock to 15 s.
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn no_sleep_when_first_attempt_succeeds() {
        let start = tokio::time::Instant::now();
        let result = retry_fixed_delay(3, 5, || async { Ok::<u32, ScraperError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_fixed_delay(0, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ScraperError>(status_error())
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(result.is_err());
    }
}
