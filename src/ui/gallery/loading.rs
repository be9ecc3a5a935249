// SPDX-License-Identifier: MPL-2.0
//! Loading indicator state for the gallery.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Spinner advance per tick, in radians.
const SPINNER_SPEED: f32 = 0.12;

/// A fetch running longer than this is logged once as slow.
const SLOW_FETCH: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct State {
    started_at: Instant,
    phase: f32,
    reported_slow: bool,
}

impl State {
    #[must_use]
    pub fn started(now: Instant) -> Self {
        Self {
            started_at: now,
            phase: 0.0,
            reported_slow: false,
        }
    }

    /// Advances the spinner. Returns `true` the first time the fetch has
    /// been running for longer than [`SLOW_FETCH`].
    pub fn tick(&mut self, now: Instant) -> bool {
        self.phase = (self.phase + SPINNER_SPEED) % TAU;
        if !self.reported_slow && now.saturating_duration_since(self.started_at) > SLOW_FETCH {
            self.reported_slow = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }
}
