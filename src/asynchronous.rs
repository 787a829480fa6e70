//! Retry wrapper for asynchronous operations.
//!
//! The wait between attempts is a [`tokio::time::sleep`], so only the
//! retrying task suspends; other tasks on the runtime keep making progress
//! during the delay. Dropping the returned future mid-wait abandons the
//! retry loop, so callers that cancel are never forced to sit out a delay.

use std::fmt;
use std::future::Future;
use std::time::Instant;

use tracing::warn;

use crate::config::RetryConfig;
use crate::event::RetryEvent;

/// An asynchronous operation wrapped with retry behavior.
///
/// Wraps a factory `FnMut() -> Fut` rather than a future directly: a future
/// is consumed when polled to completion, so every attempt needs a fresh one.
/// This is also semantically right for I/O, which should be recreated per
/// attempt (fresh connections, new request IDs) rather than replayed.
///
/// Semantics are identical to [`BlockingRetry`](crate::BlockingRetry); only
/// the wait differs.
///
/// # Examples
///
/// ```rust
/// use steadfast::{FutureRetry, RetryConfig};
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// let mut calls = 0;
/// let mut fetch = FutureRetry::new(
///     "fetch_remote",
///     RetryConfig::new(3, Duration::ZERO),
///     || {
///         calls += 1;
///         let attempt = calls;
///         async move {
///             if attempt < 2 {
///                 Err("connection reset")
///             } else {
///                 Ok("payload")
///             }
///         }
///     },
/// );
///
/// assert_eq!(fetch.call().await, Ok("payload"));
/// # });
/// ```
pub struct FutureRetry<F> {
    name: &'static str,
    config: RetryConfig,
    make: F,
}

impl<F> FutureRetry<F> {
    /// Wrap an asynchronous operation given a factory that produces one
    /// future per attempt.
    pub fn new(name: &'static str, config: RetryConfig, make: F) -> Self {
        Self { name, config, make }
    }

    /// The wrapped operation's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The configuration governing this wrapper.
    pub fn config(&self) -> RetryConfig {
        self.config
    }

    /// Invoke the operation, retrying on failure.
    ///
    /// Suspends for `delay` between failed attempts. Returns the first
    /// successful result, or the error from the final attempt unchanged.
    pub async fn call<T, E, Fut>(&mut self) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.call_with_hook(|_| {}).await
    }

    /// Invoke the operation, calling `hook` after each failed attempt.
    ///
    /// The hook is synchronous and runs before the inter-attempt suspension;
    /// use it for logging or metrics, not for blocking work.
    pub async fn call_with_hook<T, E, Fut, H>(&mut self, mut hook: H) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
        H: FnMut(&RetryEvent<'_, E>),
    {
        let start = Instant::now();
        let max_attempts = self.config.max_attempts();
        let delay = self.config.delay();
        let mut attempt = 1u32;

        // Mirrors the blocking loop: the final-attempt arm returns the error
        // directly, leaving no "exhausted without an error" state.
        loop {
            match (self.make)().await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if attempt < max_attempts {
                        warn!(
                            "attempt {}/{} failed for {}: {}. Retrying in {:.1}s...",
                            attempt,
                            max_attempts,
                            self.name,
                            error,
                            delay.as_secs_f64(),
                        );
                        hook(&RetryEvent {
                            attempt,
                            max_attempts,
                            error: &error,
                            next_delay: Some(delay),
                            elapsed: start.elapsed(),
                        });
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    } else {
                        warn!(
                            "attempt {}/{} failed for {}: {}. No more retries.",
                            attempt, max_attempts, self.name, error,
                        );
                        hook(&RetryEvent {
                            attempt,
                            max_attempts,
                            error: &error,
                            next_delay: None,
                            elapsed: start.elapsed(),
                        });
                        return Err(error);
                    }
                }
            }
        }
    }
}

impl<F> fmt::Debug for FutureRetry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureRetry")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Run an asynchronous operation once through a retry loop.
///
/// One-shot form of [`FutureRetry`].
///
/// # Examples
///
/// ```rust
/// use steadfast::{asynchronous, RetryConfig};
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// let result: Result<i32, &str> = asynchronous::retry(
///     "answer",
///     RetryConfig::new(2, Duration::ZERO),
///     || async { Ok(42) },
/// )
/// .await;
/// assert_eq!(result, Ok(42));
/// # });
/// ```
pub async fn retry<F, T, E, Fut>(name: &'static str, config: RetryConfig, make: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    FutureRetry::new(name, config, make).call().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_success_short_circuits() {
        let mut calls = 0;
        let mut wrapped = FutureRetry::new(
            "async_succeeds",
            RetryConfig::new(3, Duration::ZERO),
            || {
                calls += 1;
                async { Ok::<_, String>("async success") }
            },
        );
        assert_eq!(wrapped.call().await, Ok("async success"));
        drop(wrapped);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_final_error() {
        let mut calls = 0;
        let result: Result<(), String> = retry(
            "async_always_fails",
            RetryConfig::new(3, Duration::ZERO),
            || {
                calls += 1;
                let n = calls;
                async move { Err(format!("failure #{}", n)) }
            },
        )
        .await;
        assert_eq!(result, Err("failure #3".to_string()));
    }

    #[tokio::test]
    async fn test_hook_sees_every_failure() {
        let mut attempts = Vec::new();
        let mut wrapped = FutureRetry::new(
            "async_hooked",
            RetryConfig::new(2, Duration::ZERO),
            || async { Err::<(), _>("nope") },
        );
        let result = wrapped
            .call_with_hook(|event| attempts.push((event.attempt, event.is_exhausted())))
            .await;
        assert!(result.is_err());
        assert_eq!(attempts, vec![(1, false), (2, true)]);
    }

    #[tokio::test]
    async fn test_debug_names_the_operation() {
        let wrapped = FutureRetry::new("async_debugged", RetryConfig::default(), || async {
            Ok::<_, String>(())
        });
        let debug = format!("{:?}", wrapped);
        assert!(debug.contains("async_debugged"));
    }
}
