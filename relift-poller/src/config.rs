//! Poller configuration
//!
//! Defines the timing parameters for the status poll loop: how often to
//! query the service and how long to keep trying before giving up.

use std::time::Duration;

/// Poll loop configuration
///
/// Both durations may be zero: a zero interval makes the loop yield instead
/// of sleeping between polls, and a zero timeout disables the deadline.
/// Tests driving a scripted client use both.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// How often to query the job status
    pub poll_interval: Duration,

    /// Overall wall-clock deadline for the poll loop, measured from loop
    /// start; zero disables the deadline
    pub timeout: Duration,
}

impl PollConfig {
    /// Creates a configuration with explicit timings
    pub fn new(poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            poll_interval,
            timeout,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - RELIFT_POLL_INTERVAL_MS (optional, milliseconds, default: 5000)
    /// - RELIFT_POLL_TIMEOUT_MS (optional, milliseconds, default: 1800000)
    pub fn from_env() -> Self {
        let poll_interval = std::env::var("RELIFT_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(5));

        let timeout = std::env::var("RELIFT_POLL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(1800));

        Self {
            poll_interval,
            timeout,
        }
    }

    /// Sets the poll interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Sets the overall deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.timeout.is_zero() && self.timeout < self.poll_interval {
            anyhow::bail!("timeout must be at least the poll interval when set");
        }

        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), Duration::from_secs(1800))
    }
}
