//! Observability payload passed to retry hooks.

use std::time::Duration;

/// Information about a failed attempt, passed to hooks.
///
/// Carries the same fields the wrapper logs: which attempt failed, how many
/// attempts are permitted, a borrow of the error, and the delay before the
/// next attempt (`None` when this was the final attempt).
#[derive(Debug)]
pub struct RetryEvent<'a, E> {
    /// Which attempt just failed (1-indexed).
    pub attempt: u32,
    /// Maximum number of attempts the wrapper will make.
    pub max_attempts: u32,
    /// The error from the failed attempt.
    pub error: &'a E,
    /// Delay before the next attempt, or `None` if retries are exhausted.
    pub next_delay: Option<Duration>,
    /// Total elapsed time since the wrapped call started.
    pub elapsed: Duration,
}

impl<E> RetryEvent<'_, E> {
    /// True if this event marks exhaustion (no further attempts follow).
    pub fn is_exhausted(&self) -> bool {
        self.next_delay.is_none()
    }
}

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn test_exhaustion_marker() {
        let err = "boom";
        let retrying = RetryEvent {
            attempt: 1,
            max_attempts: 3,
            error: &err,
            next_delay: Some(Duration::from_millis(10)),
            elapsed: Duration::ZERO,
        };
        let exhausted = RetryEvent {
            attempt: 3,
            max_attempts: 3,
            error: &err,
            next_delay: None,
            elapsed: Duration::from_millis(20),
        };
        assert!(!retrying.is_exhausted());
        assert!(exhausted.is_exhausted());
    }
}
