// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Endpoint, credential fallback and request timeout
//! - **Fetch**: Debounce window for the fetch button

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of NASA's public API gateway.
pub const DEFAULT_API_BASE_URL: &str = "https://api.nasa.gov";

/// NASA's shared demonstration key, rate limited per IP address.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "NASA_API_KEY";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Fetch Defaults
// ==========================================================================

/// Presses of the fetch button closer than this to the previous fetch are
/// ignored.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Minimum debounce window (disabled).
pub const MIN_DEBOUNCE_MS: u64 = 0;

/// Maximum debounce window.
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

const _: () = {
    assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    assert!(DEFAULT_DEBOUNCE_MS <= MAX_DEBOUNCE_MS);
};
