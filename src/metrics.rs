//! Narration metrics and observability module.
//!
//! Counters are owned by a [`crate::narration::NarrationManager`] and shared
//! by its clones, so each manager reports on its own activity.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for narration activity.
#[derive(Debug, Default)]
pub struct NarrationMetrics {
    /// Number of activation requests received
    activations: AtomicUsize,

    /// Number of utterances handed to the engine
    utterances_started: AtomicUsize,

    /// Number of activations that silenced the active item
    toggles_off: AtomicUsize,

    /// Number of utterances cut short by a different item
    preemptions: AtomicUsize,

    /// Number of queued activations discarded for a newer request
    superseded: AtomicUsize,

    /// Number of activations that failed in the engine
    failures: AtomicUsize,

    /// Number of utterances cleared by their completion policy
    completions: AtomicUsize,

    /// Number of list teardowns
    teardowns: AtomicUsize,
}

impl NarrationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_activation(&self) {
        self.activations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_utterance_started(&self) {
        self.utterances_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_toggle_off(&self) {
        self.toggles_off.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_preemption(&self) {
        self.preemptions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_completion(&self) {
        self.completions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_teardown(&self) {
        self.teardowns.fetch_add(1, Ordering::Relaxed);
    }

    pub fn activations(&self) -> usize {
        self.activations.load(Ordering::Relaxed)
    }

    pub fn utterances_started(&self) -> usize {
        self.utterances_started.load(Ordering::Relaxed)
    }

    pub fn toggles_off(&self) -> usize {
        self.toggles_off.load(Ordering::Relaxed)
    }

    pub fn preemptions(&self) -> usize {
        self.preemptions.load(Ordering::Relaxed)
    }

    pub fn superseded(&self) -> usize {
        self.superseded.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn completions(&self) -> usize {
        self.completions.load(Ordering::Relaxed)
    }

    pub fn teardowns(&self) -> usize {
        self.teardowns.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let started = self.utterances_started();
        let failures = self.failures();
        let attempts = started + failures;
        let failure_rate = if attempts > 0 {
            (failures as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            activations: self.activations(),
            utterances_started: started,
            toggles_off: self.toggles_off(),
            preemptions: self.preemptions(),
            superseded: self.superseded(),
            failures,
            completions: self.completions(),
            teardowns: self.teardowns(),
            failure_rate,
        }
    }
}

/// Snapshot of narration statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub activations: usize,
    pub utterances_started: usize,
    pub toggles_off: usize,
    pub preemptions: usize,
    pub superseded: usize,
    pub failures: usize,
    pub completions: usize,
    pub teardowns: usize,

    /// Failed speak attempts as a percentage (0-100) of all speak attempts
    pub failure_rate: f64,
}
