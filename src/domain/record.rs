// SPDX-License-Identifier: MPL-2.0
//! APOD records and the rule that turns an API response into gallery content.

use crate::error::FetchError;
use chrono::NaiveDate;
use serde::Deserialize;

/// Maximum number of images shown in one gallery.
pub const MAX_GALLERY_ITEMS: usize = 9;

/// Kind of media a record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Any media type the archive may add later; treated like video.
    #[serde(other)]
    Other,
}

/// One day of the archive, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    /// Standard-resolution media URL. Some non-image entries omit it.
    #[serde(default)]
    pub url: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub explanation: String,
    pub media_type: MediaType,
    /// High-resolution variant, images only.
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl ImageRecord {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }

    /// Copyright holder without the stray line breaks the archive sometimes
    /// embeds in the field.
    #[must_use]
    pub fn copyright_line(&self) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|raw| raw.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
    }
}

/// Decodes an API response body. Anything but a JSON array of records is
/// rejected.
pub fn parse_records(body: &[u8]) -> Result<Vec<ImageRecord>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::InvalidBody(e.to_string()))
}

/// Keeps image records only, in response order, and at most
/// [`MAX_GALLERY_ITEMS`] of them.
#[must_use]
pub fn select_images(records: Vec<ImageRecord>) -> Vec<ImageRecord> {
    records
        .into_iter()
        .filter(ImageRecord::is_image)
        .take(MAX_GALLERY_ITEMS)
        .collect()
}
