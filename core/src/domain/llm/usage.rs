use std::sync::{Mutex, PoisonError};

/// Running totals of completion usage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsageTotals {
    pub total_tokens: u64,
    pub total_cost: f64,
    pub request_count: u64,
}

/// Shared accumulator for completion usage. Constructed by the caller and
/// handed to the completion client, so each client (and each test) owns its
/// counters. Increments are serialized.
#[derive(Debug, Default)]
pub struct UsageTracker {
    totals: Mutex<UsageTotals>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one request worth of usage and returns the new totals.
    pub fn record(&self, tokens: u64, cost: f64) -> UsageTotals {
        let mut totals = self.totals.lock().unwrap_or_else(PoisonError::into_inner);
        totals.total_tokens = totals.total_tokens.saturating_add(tokens);
        totals.total_cost += cost;
        totals.request_count = totals.request_count.saturating_add(1);
        *totals
    }

    pub fn snapshot(&self) -> UsageTotals {
        *self.totals.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn starts_at_zero() {
        assert_eq!(UsageTracker::new().snapshot(), UsageTotals::default());
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let tracker = Arc::new(UsageTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    for _ in 0..100 {
                        tracker.record(10, 0.001);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let totals = tracker.snapshot();
        assert_eq!(totals.request_count, 800);
        assert_eq!(totals.total_tokens, 8000);
        assert!((totals.total_cost - 0.8).abs() < 1e-9);
    }
}
