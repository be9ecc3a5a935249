// SPDX-License-Identifier: MPL-2.0
//! Date range controls: two `YYYY-MM-DD` fields with day steppers and the
//! fetch button.
//!
//! Typed text is kept as the user enters it; a complete date is clamped to
//! the archive bounds, and the field text is rewritten on a step or when a
//! fetch is requested. A field that is empty or holds text that does not
//! parse counts as missing; the reason is shown inline under the field once
//! a fetch is attempted.

use crate::domain::date_range::{format_date, parse_date, DateBounds, DateSelection};
use crate::error::ValidationError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::{
    alignment::Vertical,
    widget::{button, text, text_input, tooltip, Column, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the date controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Which of the two date fields a message targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// Messages emitted by the date controls.
#[derive(Debug, Clone)]
pub enum Message {
    TextChanged(Endpoint, String),
    Step { endpoint: Endpoint, delta: i64 },
    FetchPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    FetchRequested(DateSelection),
}

#[derive(Debug, Clone, Default)]
struct Field {
    text: String,
    value: Option<NaiveDate>,
    /// i18n key of the inline error, if any.
    error: Option<&'static str>,
}

impl Field {
    fn with_date(date: NaiveDate) -> Self {
        Self {
            text: format_date(date),
            value: Some(date),
            error: None,
        }
    }

    fn set_date(&mut self, date: NaiveDate) {
        *self = Self::with_date(date);
    }

    /// Rewrites the text of a parsed field to its clamped date.
    fn commit(&mut self) {
        if let Some(date) = self.value {
            self.text = format_date(date);
        }
    }

    fn is_unparsable(&self) -> bool {
        self.value.is_none() && !self.text.trim().is_empty()
    }

    /// Error key for a missing value: distinguishes bad input from no input.
    fn missing_key(&self, missing: &ValidationError) -> &'static str {
        if self.is_unparsable() {
            "date-field-unparsable"
        } else {
            missing.i18n_key()
        }
    }
}

/// State of the two date fields.
#[derive(Debug, Clone)]
pub struct State {
    bounds: DateBounds,
    start: Field,
    end: Field,
}

/// Initializes the controls for `today`: bounds `[1995-06-16, today]`,
/// start nine days back, end today.
#[must_use]
pub fn configure(today: NaiveDate) -> State {
    let bounds = DateBounds::for_today(today);
    let range = bounds.default_range();
    State {
        bounds,
        start: Field::with_date(range.start()),
        end: Field::with_date(range.end()),
    }
}

impl State {
    #[must_use]
    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// Current content of both fields as dates.
    #[must_use]
    pub fn selection(&self) -> DateSelection {
        DateSelection::new(self.start.value, self.end.value)
    }

    #[must_use]
    pub fn text(&self, endpoint: Endpoint) -> &str {
        &self.field(endpoint).text
    }

    /// i18n key of the inline error shown under `endpoint`.
    #[must_use]
    pub fn error(&self, endpoint: Endpoint) -> Option<&'static str> {
        self.field(endpoint).error
    }

    fn field(&self, endpoint: Endpoint) -> &Field {
        match endpoint {
            Endpoint::Start => &self.start,
            Endpoint::End => &self.end,
        }
    }

    fn field_mut(&mut self, endpoint: Endpoint) -> &mut Field {
        match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        }
    }

    /// Whether stepping `endpoint` by `delta` would change its date.
    #[must_use]
    pub fn can_step(&self, endpoint: Endpoint, delta: i64) -> bool {
        match self.field(endpoint).value {
            Some(date) => self.bounds.step(date, delta) != date,
            None => true,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TextChanged(endpoint, text) => {
                let bounds = self.bounds;
                let field = self.field_mut(endpoint);
                field.error = None;
                field.value = parse_date(&text).map(|date| bounds.clamp(date));
                field.text = text;
                Event::None
            }
            Message::Step { endpoint, delta } => {
                let bounds = self.bounds;
                let field = self.field_mut(endpoint);
                let base = field.value.unwrap_or(bounds.max());
                field.set_date(bounds.step(base, delta));
                Event::None
            }
            Message::FetchPressed => {
                self.start.commit();
                self.end.commit();
                self.clear_errors();
                Event::FetchRequested(self.selection())
            }
        }
    }

    /// Shows `error` inline under the field it concerns.
    pub fn show_validation_error(&mut self, error: &ValidationError) {
        match error {
            ValidationError::MissingStart => {
                self.start.error = Some(self.start.missing_key(error));
            }
            ValidationError::MissingEnd => {
                self.end.error = Some(self.end.missing_key(error));
            }
            ValidationError::StartAfterEnd { .. } => {
                self.start.error = Some(error.i18n_key());
            }
            ValidationError::OutOfRange { date, .. } => {
                let endpoint = if self.start.value == Some(*date) {
                    Endpoint::Start
                } else {
                    Endpoint::End
                };
                self.field_mut(endpoint).error = Some(error.i18n_key());
            }
        }
    }

    pub fn clear_errors(&mut self) {
        self.start.error = None;
        self.end.error = None;
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let fetch_button = button(
            text(ctx.i18n.tr("fetch-button"))
                .size(typography::BODY)
                .height(Length::Fill)
                .align_y(Vertical::Center),
        )
        .height(sizing::BUTTON_HEIGHT)
        .padding([0.0, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::FetchPressed);

        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Bottom)
            .push(self.view_field(Endpoint::Start, "date-start-label", ctx.i18n))
            .push(self.view_field(Endpoint::End, "date-end-label", ctx.i18n))
            .push(Column::new().push(fetch_button).padding([spacing::XS, 0.0]))
            .wrap()
            .into()
    }

    fn view_field<'a>(
        &'a self,
        endpoint: Endpoint,
        label_key: &str,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let field = self.field(endpoint);

        let stepper = |glyph: &'static str, delta: i64, tooltip_key: &str| {
            tooltip::Tooltip::new(
                button(text(glyph).size(typography::TITLE_SM))
                    .style(styles::button::subtle)
                    .on_press_maybe(
                        self.can_step(endpoint, delta)
                            .then_some(Message::Step { endpoint, delta }),
                    ),
                text(i18n.tr(tooltip_key)).size(typography::CAPTION),
                tooltip::Position::Bottom,
            )
            .gap(spacing::XXS)
            .padding(spacing::XS)
            .style(styles::container::panel)
        };

        let input = text_input(&i18n.tr("date-field-placeholder"), &field.text)
            .on_input(move |value| Message::TextChanged(endpoint, value))
            .on_submit(Message::FetchPressed)
            .size(typography::BODY)
            .width(sizing::DATE_INPUT_WIDTH);

        let controls = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(stepper("‹", -1, "date-previous-day"))
            .push(input)
            .push(stepper("›", 1, "date-next-day"));

        let mut column = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr(label_key)).size(typography::CAPTION))
            .push(controls);

        // Keeps the row height stable whether or not an error is shown.
        column = column.push(
            Text::new(field.error.map(|key| i18n.tr(key)).unwrap_or_default())
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );

        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date_range::API_EPOCH;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn today() -> NaiveDate {
        date(2024, 3, 10)
    }

    #[test]
    fn configure_fills_default_window() {
        let state = configure(today());
        assert_eq!(state.text(Endpoint::Start), "2024-03-01");
        assert_eq!(state.text(Endpoint::End), "2024-03-10");
        assert_eq!(state.bounds().min(), API_EPOCH);
        assert_eq!(state.bounds().max(), today());
        assert_eq!(
            state.selection(),
            DateSelection::new(Some(date(2024, 3, 1)), Some(today()))
        );
    }

    #[test]
    fn stepping_past_today_is_disabled_and_clamped() {
        let mut state = configure(today());
        assert!(!state.can_step(Endpoint::End, 1));
        assert!(state.can_step(Endpoint::End, -1));

        state.update(Message::Step {
            endpoint: Endpoint::End,
            delta: 1,
        });
        assert_eq!(state.text(Endpoint::End), "2024-03-10");

        state.update(Message::Step {
            endpoint: Endpoint::Start,
            delta: -1,
        });
        assert_eq!(state.text(Endpoint::Start), "2024-02-29");
    }

    #[test]
    fn typed_dates_outside_bounds_are_clamped() {
        let mut state = configure(today());
        state.update(Message::TextChanged(Endpoint::End, "2031-01-01".into()));
        assert_eq!(state.text(Endpoint::End), "2031-01-01");
        assert_eq!(state.selection().end, Some(today()));

        state.update(Message::TextChanged(Endpoint::Start, "1990-01-01".into()));
        assert_eq!(state.selection().start, Some(API_EPOCH));
        assert!(!state.can_step(Endpoint::Start, -1));

        state.update(Message::FetchPressed);
        assert_eq!(state.text(Endpoint::End), "2024-03-10");
        assert_eq!(state.text(Endpoint::Start), "1995-06-16");
    }

    #[test]
    fn editing_the_year_keeps_the_typed_text() {
        let mut state = configure(today());
        state.update(Message::TextChanged(Endpoint::Start, "202-03-01".into()));
        assert_eq!(state.text(Endpoint::Start), "202-03-01");
        assert_eq!(state.selection().start, None);

        state.update(Message::TextChanged(Endpoint::Start, "2023-03-01".into()));
        assert_eq!(state.text(Endpoint::Start), "2023-03-01");
        assert_eq!(state.selection().start, Some(date(2023, 3, 1)));
    }

    #[test]
    fn unpadded_entry_is_not_rewritten_while_typing() {
        let mut state = configure(today());
        state.update(Message::TextChanged(Endpoint::Start, "2024-3-1".into()));
        assert_eq!(state.text(Endpoint::Start), "2024-3-1");
        assert_eq!(state.selection().start, None);

        state.update(Message::FetchPressed);
        assert_eq!(state.text(Endpoint::Start), "2024-3-1");
    }

    #[test]
    fn partial_text_is_kept_and_counts_as_missing() {
        let mut state = configure(today());
        state.update(Message::TextChanged(Endpoint::Start, "2024-0".into()));
        assert_eq!(state.text(Endpoint::Start), "2024-0");
        assert_eq!(state.selection().start, None);
        assert_eq!(state.error(Endpoint::Start), None);
    }

    #[test]
    fn fetch_pressed_emits_current_selection() {
        let mut state = configure(today());
        let event = state.update(Message::FetchPressed);
        assert_eq!(event, Event::FetchRequested(state.selection()));
    }

    #[test]
    fn missing_start_error_distinguishes_empty_from_unparsable() {
        let mut state = configure(today());
        state.update(Message::TextChanged(Endpoint::Start, String::new()));
        state.show_validation_error(&ValidationError::MissingStart);
        assert_eq!(
            state.error(Endpoint::Start),
            Some("error-validation-missing-start")
        );

        state.update(Message::TextChanged(Endpoint::Start, "yesterday".into()));
        state.show_validation_error(&ValidationError::MissingStart);
        assert_eq!(state.error(Endpoint::Start), Some("date-field-unparsable"));
        assert_eq!(state.error(Endpoint::End), None);
    }

    #[test]
    fn inverted_range_error_lands_on_start_and_clears_on_fetch() {
        let mut state = configure(today());
        let error = ValidationError::StartAfterEnd {
            start: date(2024, 3, 9),
            end: date(2024, 3, 1),
        };
        state.show_validation_error(&error);
        assert_eq!(
            state.error(Endpoint::Start),
            Some("error-validation-start-after-end")
        );

        state.update(Message::FetchPressed);
        assert_eq!(state.error(Endpoint::Start), None);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = configure(today());
        state.show_validation_error(&ValidationError::MissingEnd);
        assert!(state.error(Endpoint::End).is_some());
        state.update(Message::TextChanged(Endpoint::End, "2024-03-05".into()));
        assert_eq!(state.error(Endpoint::End), None);
    }
}
