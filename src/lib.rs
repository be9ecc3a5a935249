// SPDX-License-Identifier: MPL-2.0
//! `apod_gallery` is a desktop gallery for NASA's Astronomy Picture of the
//! Day, built with the Iced GUI framework.
//!
//! Pick a date range, fetch the archive entries for it, and browse the
//! images in a gallery with a detail view. A random space fact is shown on
//! startup.

#![doc(html_root_url = "https://docs.rs/apod_gallery/0.1.0")]

pub mod apod;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "apod_gallery=info";

/// Installs the stderr log subscriber. Later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .ok();
}
