// SPDX-License-Identifier: MPL-2.0
//! Error panel state: a friendly localized message plus technical details
//! that the user can reveal.

use crate::error::GalleryError;
use crate::i18n::fluent::I18n;

#[derive(Debug, Clone)]
pub struct State {
    friendly_key: &'static str,
    friendly_text: String,
    details: String,
    show_details: bool,
}

impl State {
    #[must_use]
    pub fn new(error: &GalleryError, i18n: &I18n) -> Self {
        let friendly_key = error.i18n_key();
        Self {
            friendly_key,
            friendly_text: i18n.tr(friendly_key),
            details: error.to_string(),
            show_details: false,
        }
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    #[must_use]
    pub fn friendly_text(&self) -> &str {
        &self.friendly_text
    }

    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}
