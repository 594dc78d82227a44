// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery::Navigator;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{lightbox, loading, tiles};
use iced::{
    widget::{Column, Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a Navigator,
    pub lightbox: Option<&'a lightbox::State>,
    pub loading: &'a loading::State,
    pub tiles_per_row: usize,
    pub notices: &'a [String],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_LG));

    for key in ctx.notices {
        page = page.push(Text::new(ctx.i18n.tr(key)));
    }

    page = page.push(
        tiles::view(tiles::ViewContext {
            i18n: ctx.i18n,
            navigator: ctx.navigator,
            tiles_per_row: ctx.tiles_per_row,
        })
        .map(Message::Tiles),
    );

    let page = Container::new(page).width(Length::Fill).height(Length::Fill);

    match ctx.lightbox {
        Some(state) => Stack::new()
            .push(page)
            .push(
                lightbox::view(lightbox::ViewContext {
                    i18n: ctx.i18n,
                    state,
                    loading: ctx.loading,
                })
                .map(Message::Lightbox),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => page.into(),
    }
}
