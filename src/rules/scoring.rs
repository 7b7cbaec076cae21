//! Score tracking with a time-weighted reward.
//!
//! - `reward`: `score += 30 + |trunc(30 - Δt)|`, where Δt is the time since
//!   the previous reward, then the reward timestamp moves to now
//! - `penalize`: `score -= 30`, timestamp unchanged
//!
//! The reward curve is symmetric around 30 seconds, so a very slow find
//! earns as much as a very fast one. This is the game's scoring rule as
//! played and is kept literally.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Points for a match before the time bonus, and the cost of a mismatch.
pub const BASE_POINTS: i64 = 30;

/// Pivot of the time bonus, in seconds.
pub const PIVOT_SECS: i64 = 30;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
///
/// ```
/// use std::time::Duration;
/// use rust_set::rules::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.clone().advance(Duration::from_secs(5));
/// assert_eq!(clock.now() - start, Duration::from_secs(5));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed_ms: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let _ = self
            .elapsed_ms
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |t| Some(t.saturating_add(ms)));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }
}

/// Running score and the instant of the last reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreTracker {
    score: i64,
    last_scored_at: Instant,
}

impl ScoreTracker {
    /// Zero score, timed from `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            score: 0,
            last_scored_at: now,
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn last_scored_at(&self) -> Instant {
        self.last_scored_at
    }

    /// Points a reward at `now` would earn.
    ///
    /// The distance from the pivot is truncated toward zero in whole
    /// seconds, so 10.9s scores 49 and 50.5s scores 50.
    #[must_use]
    pub fn reward_at(&self, now: Instant) -> i64 {
        let elapsed = now.saturating_duration_since(self.last_scored_at).as_millis();
        let elapsed = i64::try_from(elapsed).unwrap_or(i64::MAX);
        let distance = PIVOT_SECS.saturating_mul(1_000).saturating_sub(elapsed) / 1_000;
        BASE_POINTS.saturating_add(distance.saturating_abs())
    }

    /// Credit a match found at `now`. Returns the points awarded.
    pub fn reward(&mut self, now: Instant) -> i64 {
        let points = self.reward_at(now);
        self.score = self.score.saturating_add(points);
        self.last_scored_at = now;
        points
    }

    /// Charge for a mismatch.
    pub fn penalize(&mut self) {
        self.score = self.score.saturating_sub(BASE_POINTS);
    }
}
