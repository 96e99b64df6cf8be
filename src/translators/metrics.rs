//! Attempt counters for the fallback translator.
//!
//! Each [`FallbackTranslator`](super::FallbackTranslator) owns its own
//! counters, so reports describe a single translator chain.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Attempt counters owned by one fallback chain.
#[derive(Debug, Default)]
pub struct FallbackMetrics {
    /// Member attempts, successful or not
    attempts: AtomicUsize,

    /// Member attempts that failed validation or exchange
    failures: AtomicUsize,

    /// Calls that succeeded only after at least one member failed
    fallbacks: AtomicUsize,

    /// Calls where every member failed
    exhaustions: AtomicUsize,
}

impl FallbackMetrics {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one member attempt.
    pub fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a member attempt that failed validation or exchange.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call that succeeded after at least one member failed.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call where every member failed.
    pub fn record_exhausted(&self) {
        self.exhaustions.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current attempt count.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Get the current failure count.
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Get the current fallback count.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current exhaustion count.
    pub fn exhaustions(&self) -> usize {
        self.exhaustions.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let attempts = self.attempts();
        let failures = self.failures();
        let success_rate = if attempts > 0 {
            ((attempts - failures) as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            attempts,
            failures,
            fallbacks: self.fallbacks(),
            exhaustions: self.exhaustions(),
            success_rate,
        }
    }
}

/// Snapshot of a fallback translator's counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub attempts: usize,
    pub failures: usize,
    pub fallbacks: usize,
    pub exhaustions: usize,

    /// Successful attempts as a percentage (0-100)
    pub success_rate: f64,
}
