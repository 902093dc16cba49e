//! Counting how often an operation runs.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread-safe invocation counter.
///
/// # Examples
///
/// ```
/// use test_helpers::calls::CallCounter;
///
/// let counter = CallCounter::default();
/// counter.record();
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CallCounter(AtomicUsize);

impl CallCounter {
    /// Record one invocation.
    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Invocations recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Wrap `value` in an operation that records each call before
    /// succeeding.
    pub fn succeeding<'a, T: 'a>(
        &'a self,
        value: T,
    ) -> impl FnOnce() -> Result<T, std::convert::Infallible> + 'a {
        move || {
            self.record();
            Ok(value)
        }
    }
}
