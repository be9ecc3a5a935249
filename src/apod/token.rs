// SPDX-License-Identifier: MPL-2.0
//! Request tokens for gallery fetches.
//!
//! Each issued fetch gets a fresh [`RequestToken`]. When a response arrives,
//! it is applied only if its token is still the latest one; a newer fetch
//! silently supersedes every older one. Presses that arrive within the
//! debounce window of the previous fetch are ignored.

use std::time::{Duration, Instant};

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out request tokens and remembers the latest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
    last_issued_at: Option<Instant>,
    debounce: Duration,
}

impl RequestTracker {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            latest: 0,
            last_issued_at: None,
            debounce,
        }
    }

    /// Issues a token for a fetch starting at `now`, or `None` when the
    /// previous fetch was issued less than the debounce window ago.
    pub fn issue(&mut self, now: Instant) -> Option<RequestToken> {
        if let Some(previous) = self.last_issued_at {
            if now.saturating_duration_since(previous) < self.debounce {
                return None;
            }
        }
        self.latest += 1;
        self.last_issued_at = Some(now);
        Some(RequestToken(self.latest))
    }

    /// Whether `token` belongs to the most recently issued fetch.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_DEBOUNCE_MS))
    }
}
