//! Clock and delay seams.
//!
//! The conversation store stamps messages through [`Clock`] and the
//! assistant simulates reply latency through [`ResponseDelay`], so unit
//! tests can run with fixed timestamps and without real waiting.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Source of message timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant formatted as an ISO-8601 string,
    /// the form persisted on every message.
    fn now_iso8601(&self) -> String {
        self.now().to_rfc3339()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Scheduled pause used to simulate typing latency.
///
/// Production code sleeps on the tokio timer; tests inject a no-op (or a
/// recording double) so the welcome and reply sequences run instantly.
#[async_trait]
pub trait ResponseDelay: Send + Sync {
    /// Suspends the current task for `duration`.
    async fn pause(&self, duration: Duration);
}

/// Production delay backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

#[async_trait]
impl ResponseDelay for TimerDelay {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_iso8601() {
        let stamp = SystemClock.now_iso8601();
        // RFC 3339 timestamps parse back to the same instant.
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
