//! Retry wrapper for blocking operations.
//!
//! The wait between attempts is a [`std::thread::sleep`], so a retrying call
//! occupies its thread for the full duration. Use the `asynchronous` module
//! for operations running under a cooperative scheduler.

use std::fmt;
use std::thread;
use std::time::Instant;

use tracing::warn;

use crate::config::RetryConfig;
use crate::event::RetryEvent;

/// A blocking operation wrapped with retry behavior.
///
/// Wraps any `FnMut() -> Result<T, E>`. Calling [`call`](Self::call) runs the
/// operation up to `max_attempts` times, sleeping for `delay` between failed
/// attempts, and returns the last error unchanged once attempts are
/// exhausted. Each call runs its own attempt loop from scratch; the wrapper
/// itself keeps no state between calls.
///
/// Inputs to the operation are captured by the closure, so the wrapped call
/// has the same shape as the original one. The wrapper carries the
/// operation's name for log lines and introspection.
///
/// # Examples
///
/// ```rust
/// use steadfast::{BlockingRetry, RetryConfig};
/// use std::time::Duration;
///
/// let mut calls = 0;
/// let mut fetch = BlockingRetry::new(
///     "fetch_greeting",
///     RetryConfig::new(3, Duration::ZERO),
///     || {
///         calls += 1;
///         if calls < 3 {
///             Err("not yet")
///         } else {
///             Ok("hello")
///         }
///     },
/// );
///
/// assert_eq!(fetch.call(), Ok("hello"));
/// assert_eq!(fetch.name(), "fetch_greeting");
/// ```
pub struct BlockingRetry<F> {
    name: &'static str,
    config: RetryConfig,
    op: F,
}

impl<F> BlockingRetry<F> {
    /// Wrap a blocking operation.
    pub fn new(name: &'static str, config: RetryConfig, op: F) -> Self {
        Self { name, config, op }
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
    /// Returns the first successful result, or the error from the final
    /// attempt once all attempts are exhausted. The error is returned as-is,
    /// never wrapped.
    pub fn call<T, E>(&mut self) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
    {
        self.call_with_hook(|_| {})
    }

    /// Invoke the operation, calling `hook` after each failed attempt.
    ///
    /// The hook receives a [`RetryEvent`] describing the failure; on the
    /// last permitted attempt its `next_delay` is `None`. The hook runs
    /// before the inter-attempt sleep and should not block.
    pub fn call_with_hook<T, E, H>(&mut self, mut hook: H) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
        H: FnMut(&RetryEvent<'_, E>),
    {
        let start = Instant::now();
        let max_attempts = self.config.max_attempts();
        let delay = self.config.delay();
        let mut attempt = 1u32;

        // The final-attempt arm returns the error directly, so there is no
        // "exhausted but no error captured" state to represent.
        loop {
            match (self.op)() {
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
                        thread::sleep(delay);
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

impl<F> fmt::Debug for BlockingRetry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingRetry")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Run a blocking operation once through a retry loop.
///
/// One-shot form of [`BlockingRetry`] for call sites that don't need to keep
/// the wrapper around.
///
/// # Examples
///
/// ```rust
/// use steadfast::{synchronous, RetryConfig};
/// use std::time::Duration;
///
/// let result: Result<i32, &str> = synchronous::retry(
///     "answer",
///     RetryConfig::new(2, Duration::ZERO),
///     || Ok(42),
/// );
/// assert_eq!(result, Ok(42));
/// ```
pub fn retry<F, T, E>(name: &'static str, config: RetryConfig, op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    BlockingRetry::new(name, config, op).call()
}
