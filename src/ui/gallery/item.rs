// SPDX-License-Identifier: MPL-2.0
//! Gallery items and their lazily downloaded thumbnails.

use crate::domain::record::ImageRecord;
use iced::widget::image;

/// Download state of an item's image.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Pending,
    Ready(image::Handle),
    Failed,
}

impl Thumbnail {
    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        match self {
            Thumbnail::Ready(handle) => Some(handle),
            Thumbnail::Pending | Thumbnail::Failed => None,
        }
    }
}

/// One card of the gallery.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    record: ImageRecord,
    thumbnail: Thumbnail,
}

impl GalleryItem {
    #[must_use]
    pub fn new(record: ImageRecord) -> Self {
        Self {
            record,
            thumbnail: Thumbnail::Pending,
        }
    }

    #[must_use]
    pub fn record(&self) -> &ImageRecord {
        &self.record
    }

    #[must_use]
    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    pub(super) fn set_thumbnail(&mut self, thumbnail: Thumbnail) {
        self.thumbnail = thumbnail;
    }
}

/// Everything the detail modal needs to show one record.
#[derive(Debug, Clone)]
pub struct DetailRequest {
    pub record: ImageRecord,
    /// Image already downloaded for the gallery card, if any.
    pub image: Option<image::Handle>,
}
