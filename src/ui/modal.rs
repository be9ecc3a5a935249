// SPDX-License-Identifier: MPL-2.0
//! Detail modal shown over the gallery for one record.
//!
//! Opening replaces the whole open state at once, so the image, title, date
//! and explanation always belong to the same record. The modal closes on the
//! close button, a press on the scrim around the card, or Escape.

use crate::domain::date_range::format_date;
use crate::domain::record::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::DetailRequest;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, center, container, image, mouse_area, opaque, scrollable, Column, Row, Text,
    },
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    ScrimPressed,
}

/// Record currently shown by an open modal.
#[derive(Debug, Clone)]
pub struct Detail {
    record: ImageRecord,
    image: Option<image::Handle>,
}

impl Detail {
    #[must_use]
    pub fn record(&self) -> &ImageRecord {
        &self.record
    }

    #[must_use]
    pub fn image(&self) -> Option<&image::Handle> {
        self.image.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub enum State {
    #[default]
    Closed,
    Open(Box<Detail>),
}

impl State {
    pub fn open(&mut self, request: DetailRequest) {
        *self = State::Open(Box::new(Detail {
            record: request.record,
            image: request.image,
        }));
    }

    pub fn close(&mut self) {
        *self = State::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, State::Open(_))
    }

    #[must_use]
    pub fn detail(&self) -> Option<&Detail> {
        match self {
            State::Open(detail) => Some(detail),
            State::Closed => None,
        }
    }

    /// Shows a thumbnail that finished downloading while the modal was open.
    pub fn attach_image(&mut self, url: &str, handle: image::Handle) {
        if let State::Open(detail) = self {
            if detail.record.url == url && detail.image.is_none() {
                detail.image = Some(handle);
            }
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Close | Message::ScrimPressed => self.close(),
        }
    }

    /// The modal layer, or `None` while closed.
    pub fn overlay<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let detail = self.detail()?;
        let record = detail.record();

        let header = Row::new()
            .align_y(Vertical::Center)
            .push(
                Text::new(record.title.as_str())
                    .size(typography::TITLE_MD)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new(ctx.i18n.tr("modal-close")).size(typography::BODY))
                    .style(styles::button::subtle)
                    .on_press(Message::Close),
            );

        let picture: Element<'a, Message> = match detail.image() {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
                .content_fit(ContentFit::Contain)
                .into(),
            None => container(Text::new(ctx.i18n.tr("gallery-image-loading")))
                .center(Length::Fill)
                .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
                .style(styles::container::thumbnail_placeholder)
                .into(),
        };

        let date = format_date(record.date);
        let mut body = Column::new()
            .spacing(spacing::SM)
            .push(picture)
            .push(
                Text::new(ctx.i18n.tr_with_args("modal-date-label", &[("date", date.as_str())]))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        if let Some(holder) = record.copyright_line() {
            body = body.push(
                Text::new(ctx.i18n.tr_with_args("modal-copyright", &[("holder", holder.as_str())]))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }
        body = body.push(Text::new(record.explanation.as_str()).size(typography::BODY));

        let card = container(
            Column::new()
                .spacing(spacing::MD)
                .push(header)
                .push(scrollable(body).height(Length::Fill)),
        )
        .padding(spacing::LG)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .max_height(sizing::MODAL_MAX_HEIGHT)
        .style(styles::container::modal_card);

        // Presses on the card must not reach the scrim underneath.
        let scrim = mouse_area(
            container(center(opaque(card)).padding(spacing::XL))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .style(styles::container::scrim),
        )
        .on_press(Message::ScrimPressed);

        Some(opaque(scrim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::test_support::record;
    use crate::domain::record::MediaType;

    fn request(day: u32) -> DetailRequest {
        DetailRequest {
            record: record(day, MediaType::Image),
            image: None,
        }
    }

    #[test]
    fn starts_closed() {
        let state = State::default();
        assert!(!state.is_open());
        assert!(state.detail().is_none());
    }

    #[test]
    fn open_close_open_never_mixes_records() {
        let mut state = State::default();
        state.open(DetailRequest {
            record: record(1, MediaType::Image),
            image: Some(image::Handle::from_bytes(vec![1, 2, 3])),
        });
        assert!(state.is_open());

        state.update(Message::Close);
        assert!(!state.is_open());

        state.open(request(2));
        let detail = state.detail().expect("modal is open");
        assert_eq!(detail.record(), &record(2, MediaType::Image));
        assert!(detail.image().is_none());
    }

    #[test]
    fn opening_over_an_open_modal_replaces_everything() {
        let mut state = State::default();
        state.open(DetailRequest {
            record: record(1, MediaType::Image),
            image: Some(image::Handle::from_bytes(vec![1])),
        });
        state.open(request(2));

        let detail = state.detail().expect("modal is open");
        assert_eq!(detail.record().title, "Day 2");
        assert_eq!(detail.record().explanation, "Explanation for day 2");
        assert!(detail.image().is_none());
    }

    #[test]
    fn scrim_press_closes() {
        let mut state = State::default();
        state.open(request(1));
        state.update(Message::ScrimPressed);
        assert!(!state.is_open());
    }

    #[test]
    fn late_image_is_attached_to_matching_record_only() {
        let mut state = State::default();
        state.open(request(1));

        state.attach_image(&record(2, MediaType::Image).url, image::Handle::from_bytes(vec![2]));
        assert!(state.detail().and_then(Detail::image).is_none());

        state.attach_image(&record(1, MediaType::Image).url, image::Handle::from_bytes(vec![1]));
        assert!(state.detail().and_then(Detail::image).is_some());
    }

    #[test]
    fn attach_image_while_closed_is_ignored() {
        let mut state = State::default();
        state.attach_image("https://example.com/a.jpg", image::Handle::from_bytes(vec![1]));
        assert!(!state.is_open());
    }
}
