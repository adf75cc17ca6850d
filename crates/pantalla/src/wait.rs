//! Bounded-wait polling.
//!
//! The single blocking primitive in the harness: verifications and
//! actions both poll a probe until it yields or the timeout expires.

use std::time::{Duration, Instant};

/// Default timeout for UI waits (2 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 2_000;

/// Default polling interval (25ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 25;

/// Options for wait operations
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Poll `probe` until it yields a value or `options.timeout_ms` elapses.
///
/// The probe is always evaluated at least once, so a zero timeout still
/// observes the current state exactly one time.
pub fn poll_until<T, F>(options: &WaitOptions, mut probe: F) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    let start = Instant::now();
    let timeout = options.timeout();
    let interval = options.poll_interval();

    loop {
        if let Some(value) = probe() {
            return Some(value);
        }
        if start.elapsed() >= timeout {
            return None;
        }
        std::thread::sleep(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_wait_options_default() {
        let opts = WaitOptions::default();
        assert_eq!(opts.timeout_ms, DEFAULT_WAIT_TIMEOUT_MS);
        assert_eq!(opts.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_wait_options_chained() {
        let opts = WaitOptions::new().with_timeout(500).with_poll_interval(10);
        assert_eq!(opts.timeout(), Duration::from_millis(500));
        assert_eq!(opts.poll_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_poll_until_immediate_success() {
        let opts = WaitOptions::new().with_timeout(100);
        let result = poll_until(&opts, || Some(42));
        assert_eq!(result, Some(42));
    }

    #[test]
    fn test_poll_until_timeout() {
        let opts = WaitOptions::new().with_timeout(50).with_poll_interval(5);
        let result: Option<()> = poll_until(&opts, || None);
        assert!(result.is_none());
    }

    #[test]
    fn test_poll_until_probes_at_least_once_with_zero_timeout() {
        let calls = AtomicUsize::new(0);
        let opts = WaitOptions::new().with_timeout(0);
        let result = poll_until(&opts, || {
            calls.fetch_add(1, Ordering::SeqCst);
            Some(())
        });
        assert!(result.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_poll_until_eventual_success() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);
        let opts = WaitOptions::new().with_timeout(1000).with_poll_interval(5);
        let result = poll_until(&opts, move || {
            if counter_clone.fetch_add(1, Ordering::SeqCst) >= 3 {
                Some("ready")
            } else {
                None
            }
        });
        assert_eq!(result, Some("ready"));
        assert!(counter.load(Ordering::SeqCst) >= 4);
    }
}
