//! Services injected into collision queries: the step clock and
//! instrumentation counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the duration of the last simulation step, in seconds.
///
/// Only the wall-glide term reads it, once per resolution phase.
pub trait StepClock {
    fn elapsed_time(&self) -> f32;
}

/// A fixed step duration.
impl StepClock for f32 {
    fn elapsed_time(&self) -> f32 {
        *self
    }
}

/// Clock driven by the game loop. Call [`FrameClock::tick`] once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    elapsed: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the duration of the step that just finished.
    pub fn tick(&mut self, delta_time: f32) {
        self.elapsed = delta_time.max(0.0);
    }
}

impl StepClock for FrameClock {
    fn elapsed_time(&self) -> f32 {
        self.elapsed
    }
}

/// Collision instrumentation counters.
///
/// Counters are atomic so one instance can be shared by bodies queried from
/// different threads. They never affect query outcomes.
#[derive(Debug, Default)]
pub struct CollisionStats {
    queries: AtomicU64,
    broad_phase_hits: AtomicU64,
    resolved_collisions: AtomicU64,
}

/// Point-in-time copy of [`CollisionStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub queries: u64,
    pub broad_phase_hits: u64,
    pub resolved_collisions: u64,
}

impl CollisionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_broad_phase_hit(&self) {
        self.broad_phase_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_resolved(&self) {
        self.resolved_collisions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            broad_phase_hits: self.broad_phase_hits.load(Ordering::Relaxed),
            resolved_collisions: self.resolved_collisions.load(Ordering::Relaxed),
        }
    }

    /// Zero all counters, e.g. at the start of a frame.
    pub fn reset(&self) {
        self.queries.store(0, Ordering::Relaxed);
        self.broad_phase_hits.store(0, Ordering::Relaxed);
        self.resolved_collisions.store(0, Ordering::Relaxed);
    }
}
