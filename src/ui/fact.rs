// SPDX-License-Identifier: MPL-2.0
//! Random space fact panel, picked once at startup.

use crate::domain::facts::{show_random_fact, FactPool};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{container, Column, Text},
    Element, Length,
};
use rand::Rng;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    fact: &'static str,
}

impl State {
    /// Draws one fact from `pool`.
    pub fn new<R: Rng + ?Sized>(pool: FactPool, rng: &mut R) -> Self {
        Self {
            fact: show_random_fact(pool, rng),
        }
    }

    #[must_use]
    pub fn fact(&self) -> &'static str {
        self.fact
    }

    pub fn view<'a, Message: 'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let content = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(ctx.i18n.tr("fact-heading"))
                    .size(typography::TITLE_SM)
                    .color(palette::NASA_RED),
            )
            .push(Text::new(self.fact).size(typography::BODY));

        container(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::fact)
            .into()
    }
}
