// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Component messages are forwarded to their state, and the events they
//! return are turned into tasks here: an accepted fetch request spawns the
//! APOD request, a rendered gallery spawns its thumbnail downloads.

use super::{App, Message};
use crate::apod::RequestToken;
use crate::domain::date_range::DateSelection;
use crate::domain::record::ImageRecord;
use crate::error::{FetchError, GalleryError};
use crate::ui::{date_range, gallery};
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DateRange(msg) => match self.date_range.update(msg) {
                date_range::Event::None => Task::none(),
                date_range::Event::FetchRequested(selection) => {
                    self.request_gallery(selection, Instant::now())
                }
            },
            Message::Gallery(msg) => {
                if let gallery::Event::OpenDetail(request) = self.gallery.update(msg) {
                    tracing::debug!(date = %request.record.date, "opening detail");
                    self.modal.open(request);
                }
                Task::none()
            }
            Message::Modal(msg) => {
                self.modal.update(msg);
                Task::none()
            }
            Message::GalleryFetched { token, result } => self.handle_gallery_fetched(token, result),
            Message::ThumbnailLoaded { token, url, result } => {
                if let Some(handle) = self.gallery.apply_thumbnail(token, &url, result) {
                    self.modal.attach_image(&url, handle);
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.gallery.tick(now);
                Task::none()
            }
            Message::EscapePressed => {
                self.modal.close();
                Task::none()
            }
        }
    }

    /// Validates the selection and, when it holds, starts a fetch that
    /// supersedes any fetch still in flight.
    fn request_gallery(&mut self, selection: DateSelection, now: Instant) -> Task<Message> {
        let range = match selection.validate(self.date_range.bounds()) {
            Ok(range) => range,
            Err(err) => {
                tracing::debug!(%err, "date selection rejected");
                self.date_range.show_validation_error(&err);
                return Task::none();
            }
        };

        let Some(token) = self.requests.issue(now) else {
            tracing::debug!(debounce = ?self.requests.debounce(), "fetch press debounced");
            return Task::none();
        };

        tracing::info!(
            token = token.value(),
            start = %range.start(),
            end = %range.end(),
            "fetching APOD gallery"
        );
        self.gallery.show_loading(token, now);

        let fetcher = self.fetcher.clone();
        Task::perform(
            async move { fetcher.fetch_range(range).await },
            move |result| Message::GalleryFetched { token, result },
        )
    }

    fn handle_gallery_fetched(
        &mut self,
        token: RequestToken,
        result: Result<Vec<ImageRecord>, FetchError>,
    ) -> Task<Message> {
        if !self.requests.is_current(token) {
            tracing::debug!(token = token.value(), "dropping superseded gallery response");
            return Task::none();
        }

        match result {
            Ok(records) => {
                tracing::info!(token = token.value(), images = records.len(), "gallery loaded");
                let urls = self.gallery.render(token, records);
                self.download_thumbnails(token, urls)
            }
            Err(err) => {
                tracing::warn!(token = token.value(), %err, "gallery fetch failed");
                self.gallery
                    .show_error(token, &GalleryError::Fetch(err), &self.i18n);
                Task::none()
            }
        }
    }

    fn download_thumbnails(&self, token: RequestToken, urls: Vec<String>) -> Task<Message> {
        Task::batch(urls.into_iter().map(|url| {
            let fetcher = self.fetcher.clone();
            let request_url = url.clone();
            Task::perform(
                async move { fetcher.fetch_image(&request_url).await },
                move |result| Message::ThumbnailLoaded { token, url, result },
            )
        }))
    }
}
