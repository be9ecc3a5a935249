// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::apod::RequestToken;
use crate::domain::record::ImageRecord;
use crate::error::FetchError;
use crate::ui::{date_range, gallery, modal};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    DateRange(date_range::Message),
    Gallery(gallery::Message),
    Modal(modal::Message),
    /// The APOD request for fetch `token` settled.
    GalleryFetched {
        token: RequestToken,
        result: Result<Vec<ImageRecord>, FetchError>,
    },
    /// One thumbnail download of the gallery built by fetch `token` settled.
    ThumbnailLoaded {
        token: RequestToken,
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    /// Spinner animation tick while a fetch is running.
    Tick(Instant),
    EscapePressed,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `en-US`, `fr`).
    pub lang: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// API key override (`--api-key`), highest priority.
    pub api_key: Option<String>,
}
