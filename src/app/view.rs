// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column (header, controls, fact, gallery)
//! with the detail modal stacked on top while it is open.

use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::{date_range, fact, gallery, modal};
use iced::{
    alignment::Horizontal,
    widget::{container, scrollable, stack, Column, Text},
    Element, Length,
};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let header = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(Text::new(self.i18n.tr("app-title")).size(typography::TITLE_LG))
            .push(
                Text::new(self.i18n.tr("app-subtitle"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );

        let controls = container(
            self.date_range
                .view(date_range::ViewContext { i18n: &self.i18n })
                .map(Message::DateRange),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel);

        let mut page = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(header);

        if let Some(key) = &self.config_warning {
            page = page.push(
                Text::new(self.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            );
        }

        page = page
            .push(controls)
            .push(self.fact.view(fact::ViewContext { i18n: &self.i18n }))
            .push(
                self.gallery
                    .view(gallery::ViewContext { i18n: &self.i18n })
                    .map(Message::Gallery),
            );

        let base = scrollable(page).width(Length::Fill).height(Length::Fill);

        match self.modal.overlay(modal::ViewContext { i18n: &self.i18n }) {
            Some(overlay) => stack![base, overlay.map(Message::Modal)]
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => base.into(),
        }
    }
}
