// SPDX-License-Identifier: MPL-2.0
//! Gallery area: idle hint, loading indicator, image cards, "no results"
//! placeholder or error panel. Exactly one of them is shown at a time.
//!
//! Content is replaced wholesale on every fetch. Thumbnail downloads are
//! tagged with the [`RequestToken`] of the fetch that produced the cards and
//! dropped once a newer fetch has replaced them.

pub mod error_state;
pub mod item;
pub mod loading;

pub use item::{DetailRequest, GalleryItem, Thumbnail};

use crate::apod::RequestToken;
use crate::domain::date_range::format_date;
use crate::domain::record::ImageRecord;
use crate::error::{FetchError, GalleryError};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::OrbitSpinner;
use iced::{
    alignment::Horizontal,
    widget::{button, center, container, image, Column, Row, Text},
    ContentFit, Element, Length,
};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// What the gallery area currently shows.
#[derive(Debug, Clone)]
pub enum Content {
    /// Nothing fetched yet.
    Idle,
    Loading(loading::State),
    Items(Vec<GalleryItem>),
    /// The fetch succeeded but held no images.
    Empty,
    Failed(error_state::State),
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A card was pressed; carries its own record.
    ItemPressed(ImageRecord),
    ToggleDetails,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenDetail(DetailRequest),
}

#[derive(Debug, Clone)]
pub struct State {
    token: Option<RequestToken>,
    content: Content,
}

impl Default for State {
    fn default() -> Self {
        Self {
            token: None,
            content: Content::Idle,
        }
    }
}

impl State {
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.content, Content::Loading(_))
    }

    /// Cards currently shown; empty unless the gallery holds items.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        match &self.content {
            Content::Items(items) => items,
            _ => &[],
        }
    }

    /// Replaces the content with the loading indicator for fetch `token`.
    pub fn show_loading(&mut self, token: RequestToken, now: Instant) {
        self.token = Some(token);
        self.content = Content::Loading(loading::State::started(now));
    }

    /// Replaces the content with one card per record, in order, or with the
    /// "no results" placeholder. Returns the image URLs to download.
    pub fn render(&mut self, token: RequestToken, records: Vec<ImageRecord>) -> Vec<String> {
        self.token = Some(token);
        if records.is_empty() {
            self.content = Content::Empty;
            return Vec::new();
        }

        let mut urls: Vec<String> = Vec::with_capacity(records.len());
        for record in &records {
            if !urls.contains(&record.url) {
                urls.push(record.url.clone());
            }
        }
        self.content = Content::Items(records.into_iter().map(GalleryItem::new).collect());
        urls
    }

    /// Replaces the content with the error panel.
    pub fn show_error(&mut self, token: RequestToken, error: &GalleryError, i18n: &I18n) {
        self.token = Some(token);
        self.content = Content::Failed(error_state::State::new(error, i18n));
    }

    /// Stores a finished thumbnail download on every card showing `url`.
    ///
    /// Returns the new handle, or `None` when the download failed or belongs
    /// to a gallery that has since been replaced.
    pub fn apply_thumbnail(
        &mut self,
        token: RequestToken,
        url: &str,
        result: Result<Vec<u8>, FetchError>,
    ) -> Option<image::Handle> {
        if self.token != Some(token) {
            return None;
        }
        let Content::Items(items) = &mut self.content else {
            return None;
        };

        let (thumbnail, handle) = match result {
            Ok(bytes) => {
                let handle = image::Handle::from_bytes(bytes);
                (Thumbnail::Ready(handle.clone()), Some(handle))
            }
            Err(err) => {
                tracing::warn!(%url, %err, "thumbnail download failed");
                (Thumbnail::Failed, None)
            }
        };

        for item in items.iter_mut().filter(|item| item.record().url == url) {
            item.set_thumbnail(thumbnail.clone());
        }
        handle
    }

    /// Advances the loading spinner.
    pub fn tick(&mut self, now: Instant) {
        if let Content::Loading(loading) = &mut self.content {
            if loading.tick(now) {
                tracing::info!("APOD request is taking longer than usual");
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ItemPressed(record) => {
                let image = self
                    .items()
                    .iter()
                    .find(|item| item.record().url == record.url)
                    .and_then(|item| item.thumbnail().handle().cloned());
                Event::OpenDetail(DetailRequest { record, image })
            }
            Message::ToggleDetails => {
                if let Content::Failed(error) = &mut self.content {
                    error.toggle_details();
                }
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match &self.content {
            Content::Idle => view_notice(ctx.i18n.tr("gallery-idle")),
            Content::Empty => view_notice(ctx.i18n.tr("gallery-empty")),
            Content::Loading(loading) => {
                let column = Column::new()
                    .spacing(spacing::SM)
                    .align_x(Horizontal::Center)
                    .push(OrbitSpinner::new(palette::NASA_RED, loading.phase()).into_element())
                    .push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY));
                center(column).height(Length::Fixed(sizing::GALLERY_THUMB_HEIGHT)).into()
            }
            Content::Failed(error) => view_error(error, ctx.i18n),
            Content::Items(items) => Row::with_children(
                items.iter().map(|item| view_item(item, ctx.i18n)),
            )
            .spacing(spacing::MD)
            .wrap()
            .vertical_spacing(spacing::MD)
            .into(),
        }
    }
}

fn view_notice<'a>(notice: String) -> Element<'a, Message> {
    center(Text::new(notice).size(typography::TITLE_SM))
        .height(Length::Fixed(sizing::GALLERY_THUMB_HEIGHT))
        .into()
}

fn view_error<'a>(error: &'a error_state::State, i18n: &I18n) -> Element<'a, Message> {
    let toggle_key = if error.show_details() {
        "gallery-error-hide-details"
    } else {
        "gallery-error-show-details"
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(error.friendly_text())
                .size(typography::BODY)
                .color(palette::ERROR_500),
        )
        .push(
            button(Text::new(i18n.tr(toggle_key)).size(typography::CAPTION))
                .style(styles::button::subtle)
                .on_press(Message::ToggleDetails),
        );

    if error.show_details() {
        column = column.push(Text::new(error.details()).size(typography::CAPTION));
    }

    container(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::error_panel)
        .into()
}

fn view_item<'a>(item: &'a GalleryItem, i18n: &I18n) -> Element<'a, Message> {
    let record = item.record();

    let thumbnail: Element<'a, Message> = match item.thumbnail() {
        Thumbnail::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GALLERY_THUMB_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Thumbnail::Pending => thumbnail_placeholder(i18n.tr("gallery-image-loading")),
        Thumbnail::Failed => thumbnail_placeholder(i18n.tr("gallery-image-failed")),
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(Text::new(record.title.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(format_date(record.date))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    button(content)
        .width(Length::Fixed(sizing::GALLERY_ITEM_WIDTH))
        .padding(spacing::XS)
        .style(styles::button::card)
        .on_press(Message::ItemPressed(record.clone()))
        .into()
}

fn thumbnail_placeholder<'a>(label: String) -> Element<'a, Message> {
    container(Text::new(label).size(typography::CAPTION))
        .center(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_THUMB_HEIGHT))
        .style(styles::container::thumbnail_placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::RequestTracker;
    use crate::config::Config;
    use crate::domain::record::test_support::record;
    use crate::domain::record::MediaType;
    use std::time::Duration;

    fn tokens(count: usize) -> Vec<RequestToken> {
        let mut tracker = RequestTracker::new(Duration::ZERO);
        let now = Instant::now();
        (0..count)
            .map(|_| tracker.issue(now).expect("no debounce"))
            .collect()
    }

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn starts_idle() {
        let state = State::default();
        assert!(matches!(state.content(), Content::Idle));
        assert!(state.items().is_empty());
    }

    #[test]
    fn empty_records_show_the_placeholder_only() {
        let token = tokens(1)[0];
        let mut state = State::default();
        state.show_loading(token, Instant::now());
        assert!(state.is_loading());

        let urls = state.render(token, Vec::new());
        assert!(urls.is_empty());
        assert!(matches!(state.content(), Content::Empty));
        assert!(!state.is_loading());
    }

    #[test]
    fn items_follow_record_order() {
        let token = tokens(1)[0];
        let mut state = State::default();
        let records = vec![
            record(3, MediaType::Image),
            record(1, MediaType::Image),
            record(2, MediaType::Image),
        ];

        let urls = state.render(token, records.clone());

        let shown: Vec<&ImageRecord> = state.items().iter().map(GalleryItem::record).collect();
        assert_eq!(shown, records.iter().collect::<Vec<_>>());
        assert_eq!(urls.len(), 3);
        assert!(state
            .items()
            .iter()
            .all(|item| matches!(item.thumbnail(), Thumbnail::Pending)));
    }

    #[test]
    fn render_replaces_previous_items() {
        let ids = tokens(2);
        let mut state = State::default();
        state.render(ids[0], vec![record(1, MediaType::Image), record(2, MediaType::Image)]);
        state.render(ids[1], vec![record(5, MediaType::Image)]);

        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].record().date, record(5, MediaType::Image).date);
    }

    #[test]
    fn error_clears_previous_items() {
        let ids = tokens(2);
        let mut state = State::default();
        state.render(ids[0], vec![record(1, MediaType::Image)]);

        let error = GalleryError::Fetch(FetchError::Http { status: 500 });
        state.show_error(ids[1], &error, &i18n());

        assert!(state.items().is_empty());
        match state.content() {
            Content::Failed(panel) => assert_eq!(panel.friendly_key(), "error-fetch-http"),
            other => panic!("expected error panel, got {other:?}"),
        }
    }

    #[test]
    fn toggle_details_only_affects_error_panel() {
        let token = tokens(1)[0];
        let mut state = State::default();
        state.show_error(token, &GalleryError::Fetch(FetchError::Timeout), &i18n());

        state.update(Message::ToggleDetails);
        match state.content() {
            Content::Failed(panel) => assert!(panel.show_details()),
            other => panic!("expected error panel, got {other:?}"),
        }
    }

    #[test]
    fn thumbnails_apply_to_matching_items() {
        let token = tokens(1)[0];
        let mut state = State::default();
        let first = record(1, MediaType::Image);
        let second = record(2, MediaType::Image);
        state.render(token, vec![first.clone(), second.clone()]);

        let handle = state.apply_thumbnail(token, &first.url, Ok(vec![1, 2, 3]));
        assert!(handle.is_some());
        assert!(matches!(state.items()[0].thumbnail(), Thumbnail::Ready(_)));
        assert!(matches!(state.items()[1].thumbnail(), Thumbnail::Pending));

        let failed =
            state.apply_thumbnail(token, &second.url, Err(FetchError::Http { status: 404 }));
        assert!(failed.is_none());
        assert!(matches!(state.items()[1].thumbnail(), Thumbnail::Failed));
    }

    #[test]
    fn thumbnails_of_replaced_gallery_are_dropped() {
        let ids = tokens(2);
        let mut state = State::default();
        let old = record(1, MediaType::Image);
        state.render(ids[0], vec![old.clone()]);
        state.render(ids[1], vec![old.clone()]);

        assert!(state.apply_thumbnail(ids[0], &old.url, Ok(vec![1])).is_none());
        assert!(matches!(state.items()[0].thumbnail(), Thumbnail::Pending));
    }

    #[test]
    fn pressing_an_item_opens_its_own_record() {
        let token = tokens(1)[0];
        let mut state = State::default();
        let first = record(1, MediaType::Image);
        let second = record(2, MediaType::Image);
        state.render(token, vec![first.clone(), second.clone()]);
        state.apply_thumbnail(token, &second.url, Ok(vec![9]));

        match state.update(Message::ItemPressed(second.clone())) {
            Event::OpenDetail(request) => {
                assert_eq!(request.record, second);
                assert!(request.image.is_some());
            }
            Event::None => panic!("expected detail request"),
        }

        match state.update(Message::ItemPressed(first.clone())) {
            Event::OpenDetail(request) => {
                assert_eq!(request.record, first);
                assert!(request.image.is_none());
            }
            Event::None => panic!("expected detail request"),
        }
    }
}
