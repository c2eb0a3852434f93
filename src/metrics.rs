use std::sync::atomic::{AtomicU64, Ordering};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct Metrics {
    pub accepted: AtomicU64,
    pub rejected: AtomicU64,
    pub total_requests: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {

        Self::default()

    }

    pub fn record_accepted(&self) {

        self.accepted.fetch_add(1, Ordering::Relaxed);
        self.total_requests.fetch_add(1, Ordering::Relaxed);

    }

    pub fn record_rejected(&self) {

        self.rejected.fetch_add(1, Ordering::Relaxed);
        self.total_requests.fetch_add(1, Ordering::Relaxed);

    }

    pub fn snapshot(&self) -> CountersSnapshot {

        CountersSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            total_requests: self.total_requests.load(Ordering::Relaxed),

        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountersSnapshot {
    pub accepted: u64,
    pub rejected: u64,
    pub total_requests: u64,
}

impl CountersSnapshot {
    pub fn acceptance_rate(&self) -> f64 {

        if self.total_requests == 0 {
            return 0.0;
        }
        (self.accepted as f64 / self.total_requests as f64) * 100.0

    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_counters_tally() {

        let metrics = Metrics::new();

        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected();

        let snapshot = metrics.snapshot();

        assert_eq!(snapshot.accepted, 2);
        assert_eq!(snapshot.rejected, 1);
        assert_eq!(snapshot.total_requests, 3);

    }

    #[test]
    fn test_acceptance_rate_empty() {

        let snapshot = Metrics::new().snapshot();

        assert_eq!(snapshot.acceptance_rate(), 0.0, "No requests should mean a zero rate");

    }

    #[test]
    fn test_acceptance_rate() {

        let metrics = Metrics::new();

        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected();

        let rate = metrics.snapshot().acceptance_rate();

        assert_eq!(rate, 75.0, "3 of 4 requests accepted");

    }

}
