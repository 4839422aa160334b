//! Score, misses and the round countdown.

use std::time::Duration;

use bevy::prelude::*;

/// Below this many seconds the HUD shows the clock in red.
pub const LOW_TIME_SECONDS: u32 = 10;

/// Counters for one round plus a whole-second countdown.
///
/// The clock is derived from a start timestamp rather than accumulated, so
/// it cannot drift from the app's own time.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Scoreboard {
    score: u32,
    hits: u32,
    misses: u32,
    time_limit: u32,
    started_at: Duration,
    time_remaining: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Scoreboard {
    pub fn new(time_limit: u32) -> Self {
        Self {
            score: 0,
            hits: 0,
            misses: 0,
            time_limit,
            started_at: Duration::ZERO,
            time_remaining: time_limit,
        }
    }

    /// Zero the counters and restart the clock at `now`.
    pub fn reset(&mut self, now: Duration) {
        *self = Self {
            started_at: now,
            ..Self::new(self.time_limit)
        };
    }

    /// Recompute the remaining time. Returns whether any time is left.
    pub fn update(&mut self, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.started_at).as_secs();
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.time_remaining = self.time_limit.saturating_sub(elapsed);
        self.time_remaining > 0
    }

    /// Add points for a hit.
    pub fn increase_score(&mut self, points: u32) {
        self.score += points;
        self.hits += 1;
    }

    pub fn increase_misses(&mut self) {
        self.misses += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_time_low(&self) -> bool {
        self.time_remaining < LOW_TIME_SECONDS
    }

    /// Hits as a percentage of all hits and misses, 0 before any click.
    pub fn accuracy(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f32 / total as f32 * 100.0
    }
}
