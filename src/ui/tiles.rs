// SPDX-License-Identifier: MPL-2.0
//! Grid of memory tiles. Pressing a tile opens it in the lightbox.

use super::design_tokens::{sizing, spacing, typography};
use crate::gallery::Navigator;
use crate::i18n::fluent::I18n;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Scrollable, Text},
    Element, Length, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a Navigator,
    pub tiles_per_row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TilePressed(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx.navigator.items();
    if items.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    }

    let per_row = ctx.tiles_per_row.max(1);
    let mut grid = Column::new().spacing(spacing::SM).padding(spacing::SM);
    let mut row = Row::new().spacing(spacing::SM);
    let mut in_row = 0;

    for (index, item) in items.iter().enumerate() {
        row = row.push(tile(&item.title, index, ctx.navigator.is_active(index)));
        in_row += 1;
        if in_row == per_row {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::SM);
            in_row = 0;
        }
    }
    if in_row > 0 {
        // Pad the last row so tiles keep the same width.
        for _ in in_row..per_row {
            row = row.push(Container::new(Text::new("")).width(Length::Fill));
        }
        grid = grid.push(row);
    }

    Scrollable::new(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile<'a>(title: &'a str, index: usize, active: bool) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if active {
        button::primary
    } else {
        button::secondary
    };

    let label = Container::new(Text::new(title).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    button(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TILE_HEIGHT))
        .style(style)
        .on_press(Message::TilePressed(index))
        .into()
}
