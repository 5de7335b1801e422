//! Logger metrics for observability
//!
//! Counters describing what the dispatch path did with each call.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use slot_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_appender_failures(2);
///
/// assert_eq!(metrics.entries_written(), 1);
/// assert_eq!(metrics.appender_failures(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Calls delivered to at least one appender
    entries_written: AtomicU64,

    /// Calls rejected by the global threshold or reaching no appender
    entries_filtered: AtomicU64,

    /// Calls where every attempted appender failed
    entries_dropped: AtomicU64,

    /// Individual appender errors and panics
    appender_failures: AtomicU64,

    /// Calls made while the logger was disabled
    disabled_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            entries_written: AtomicU64::new(0),
            entries_filtered: AtomicU64::new(0),
            entries_dropped: AtomicU64::new(0),
            appender_failures: AtomicU64::new(0),
            disabled_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_written(&self) -> u64 {
        self.entries_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn entries_filtered(&self) -> u64 {
        self.entries_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn entries_dropped(&self) -> u64 {
        self.entries_dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn appender_failures(&self) -> u64 {
        self.appender_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn disabled_writes(&self) -> u64 {
        self.disabled_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.entries_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_filtered(&self) {
        self.entries_filtered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_dropped(&self) {
        self.entries_dropped.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_appender_failures(&self, count: u64) {
        self.appender_failures.fetch_add(count, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_disabled_write(&self) {
        self.disabled_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of calls that reached at least one appender
    pub fn delivery_rate(&self) -> f64 {
        let written = self.entries_written();
        let total = written + self.entries_filtered() + self.entries_dropped() + self.disabled_writes();
        if total == 0 {
            return 0.0;
        }
        (written as f64 / total as f64) * 100.0
    }

    pub fn reset(&self) {
        self.entries_written.store(0, Ordering::Relaxed);
        self.entries_filtered.store(0, Ordering::Relaxed);
        self.entries_dropped.store(0, Ordering::Relaxed);
        self.appender_failures.store(0, Ordering::Relaxed);
        self.disabled_writes.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.entries_written(), 0);
        assert_eq!(metrics.entries_filtered(), 0);
        assert_eq!(metrics.entries_dropped(), 0);
        assert_eq!(metrics.appender_failures(), 0);
        assert_eq!(metrics.disabled_writes(), 0);
        assert_eq!(metrics.delivery_rate(), 0.0);
    }

    #[test]
    fn test_delivery_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..3 {
            metrics.record_written();
        }
        metrics.record_dropped();
        let rate = metrics.delivery_rate();
        assert!((74.9..=75.1).contains(&rate), "Delivery rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_disabled_write();
        metrics.reset();
        assert_eq!(metrics.entries_written(), 0);
        assert_eq!(metrics.disabled_writes(), 0);
    }
}
