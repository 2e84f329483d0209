//! Click-path delay policy
//!
//! The click action models a latency-bound placement decision and always
//! waits before acting. The wait is injectable so tests can shrink it to
//! zero without changing control flow.

use std::time::Duration;
use tokio::time;

/// How long the click path suspends before the placement decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    delay: Duration,
}

impl DelayPolicy {
    /// Production default: one second
    pub const DEFAULT: Self = Self {
        delay: Duration::from_secs(1),
    };

    /// Policy waiting for `delay`
    #[inline]
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Policy with a zero-length wait
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// Configured duration
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Suspend for the configured duration
    pub async fn wait(&self) {
        time::sleep(self.delay).await;
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn wait_honors_the_configured_duration() {
        let policy = DelayPolicy::new(Duration::from_millis(250));
        let start = time::Instant::now();
        policy.wait().await;
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn zero_delay_resolves_immediately() {
        DelayPolicy::none().wait().await;
    }

    #[test]
    fn default_is_one_second() {
        assert_eq!(DelayPolicy::default().delay(), Duration::from_secs(1));
    }
}
