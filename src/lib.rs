//! # Steadfast
//!
//! Fixed-delay retry wrappers for blocking and asynchronous operations.
//!
//! Wrap any fallible operation and it gets re-invoked up to a bounded number
//! of times, with a fixed pause between attempts. The first success wins; if
//! every attempt fails, the error from the final attempt is returned exactly
//! as the operation produced it - never wrapped or renamed. Every failure is
//! treated as retryable: there is no error classification, no backoff curve,
//! no jitter. When you need that, reach for a policy-driven resilience
//! library; when you need "try it three times, a second apart", this is it.
//!
//! The execution model is chosen at composition time: [`BlockingRetry`]
//! sleeps the calling thread between attempts, [`FutureRetry`] suspends only
//! its task. A wrapped operation is called exactly like the original one.
//!
//! ## Quick Example
//!
//! ```rust
//! use steadfast::{BlockingRetry, RetryConfig};
//! use std::time::Duration;
//!
//! let mut calls = 0;
//! let mut flaky = BlockingRetry::new(
//!     "load_profile",
//!     RetryConfig::new(3, Duration::ZERO),
//!     || {
//!         calls += 1;
//!         if calls < 3 {
//!             Err("profile service unavailable")
//!         } else {
//!             Ok("profile")
//!         }
//!     },
//! );
//!
//! assert_eq!(flaky.call(), Ok("profile"));
//! ```
//!
//! Each failed attempt that still has retries left emits a warning-level
//! `tracing` event, and a final one is emitted when attempts run out. A
//! [`RetryEvent`] hook variant is available on both wrappers for callers
//! that want to observe failures programmatically.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod config;
pub mod event;
pub mod synchronous;

// Re-exports
#[cfg(feature = "async")]
pub use asynchronous::FutureRetry;
pub use config::RetryConfig;
pub use event::RetryEvent;
pub use synchronous::BlockingRetry;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "async")]
    pub use crate::asynchronous::FutureRetry;
    pub use crate::config::RetryConfig;
    pub use crate::event::RetryEvent;
    pub use crate::synchronous::BlockingRetry;
}
