//! Retry configuration.

use std::time::Duration;

/// Configuration governing a retry wrapper.
///
/// Configurations are pure data - they describe how the wrapper behaves but
/// don't execute anything. This makes them easy to test, clone, and inspect.
///
/// # Invariant
///
/// `max_attempts` must be at least 1. A value of 1 means "single attempt, no
/// retries". Constructing a configuration with `max_attempts == 0` panics:
/// a wrapper that never invokes its operation is always a bug, so the
/// mistake is rejected at composition time rather than silently producing
/// zero invocations. Negative delays are unrepresentable since [`Duration`]
/// is unsigned.
///
/// # Examples
///
/// ```rust
/// use steadfast::RetryConfig;
/// use std::time::Duration;
///
/// // Defaults: 3 attempts, 1 second between them
/// let config = RetryConfig::default();
/// assert_eq!(config.max_attempts(), 3);
/// assert_eq!(config.delay(), Duration::from_secs(1));
///
/// // Builder style
/// let config = RetryConfig::default()
///     .with_max_attempts(5)
///     .with_delay(Duration::from_millis(250));
/// assert_eq!(config.max_attempts(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    max_attempts: u32,
    delay: Duration,
}

impl RetryConfig {
    /// Create a configuration with explicit bounds.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steadfast::RetryConfig;
    /// use std::time::Duration;
    ///
    /// let config = RetryConfig::new(4, Duration::from_millis(100));
    /// assert_eq!(config.max_attempts(), 4);
    /// assert_eq!(config.delay(), Duration::from_millis(100));
    /// ```
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        assert!(max_attempts >= 1, "max_attempts must be at least 1");
        Self {
            max_attempts,
            delay,
        }
    }

    /// Set the maximum number of attempts (initial attempt included).
    ///
    /// `with_max_attempts(3)` means 1 initial attempt plus up to 2 retries.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    pub fn with_max_attempts(mut self, n: u32) -> Self {
        assert!(n >= 1, "max_attempts must be at least 1");
        self.max_attempts = n;
        self
    }

    /// Set the fixed delay inserted between attempts.
    ///
    /// A zero delay retries immediately.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Get the maximum number of attempts.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Get the delay between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryConfig {
    /// Defaults to 3 attempts with 1 second between them.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_builder_chain() {
        let config = RetryConfig::default()
            .with_max_attempts(7)
            .with_delay(Duration::from_millis(50));
        assert_eq!(config.max_attempts(), 7);
        assert_eq!(config.delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_new_sets_both_fields() {
        let config = RetryConfig::new(2, Duration::ZERO);
        assert_eq!(config.max_attempts(), 2);
        assert_eq!(config.delay(), Duration::ZERO);
    }

    #[test]
    fn test_single_attempt_is_valid() {
        let config = RetryConfig::new(1, Duration::from_secs(1));
        assert_eq!(config.max_attempts(), 1);
    }

    #[test]
    #[should_panic(expected = "max_attempts must be at least 1")]
    fn test_new_rejects_zero_attempts() {
        let _ = RetryConfig::new(0, Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "max_attempts must be at least 1")]
    fn test_builder_rejects_zero_attempts() {
        let _ = RetryConfig::default().with_max_attempts(0);
    }

    #[test]
    fn test_config_is_copy_and_eq() {
        let config = RetryConfig::new(3, Duration::from_millis(10));
        let copied = config;
        assert_eq!(config, copied);
    }

    #[test]
    fn test_config_is_debug() {
        let debug = format!("{:?}", RetryConfig::default());
        assert!(debug.contains("RetryConfig"));
    }
}
