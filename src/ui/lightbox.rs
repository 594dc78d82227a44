// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox overlay.
//!
//! Renders a [`ShowPhoto`] on top of the gallery: title, counter,
//! previous/next/close controls and the image area. Presses and releases on
//! the dimmed backdrop are reported separately from the card so the caller
//! can close on a backdrop tap only.

use super::design_tokens::{opacity, palette, sizing, spacing, typography};
use super::loading;
use crate::gallery::ShowPhoto;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, mouse_area, opaque, Column, Container, Image, Row, Stack, Text},
    Color, ContentFit, Element, Length, Theme,
};

/// What the image area currently shows.
#[derive(Debug, Clone)]
pub enum Picture {
    Loading,
    Ready(ImageData),
    Placeholder { reference: String },
}

/// Lightbox contents for the currently shown memory.
#[derive(Debug, Clone)]
pub struct State {
    pub photo: ShowPhoto,
    pub picture: Picture,
}

impl State {
    pub fn new(photo: ShowPhoto) -> Self {
        Self {
            photo,
            picture: Picture::Loading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    Close,
    /// Start of a press on the backdrop; closing waits for the release.
    BackdropPressed,
    BackdropReleased,
    /// Swallowed so the gallery behind the overlay does not scroll.
    BackdropScrolled,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub loading: &'a loading::State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(backdrop_style),
    )
    .on_press(Message::BackdropPressed)
    .on_release(Message::BackdropReleased)
    .on_scroll(|_| Message::BackdropScrolled);

    let card = Container::new(card(&ctx))
        .padding(spacing::MD)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .style(container::rounded_box);

    let centered = Container::new(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .push(backdrop)
        .push(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photo = &ctx.state.photo;

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(photo.title.as_str()).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(button(Text::new(ctx.i18n.tr("lightbox-close"))).on_press(Message::Close));

    let current = photo.position.to_string();
    let total = photo.total.to_string();
    let counter = ctx.i18n.tr_with_args(
        "lightbox-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(ctx.i18n.tr("lightbox-previous")))
                .on_press_maybe(photo.previous_enabled.then_some(Message::Previous)),
        )
        .push(
            Container::new(Text::new(counter))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(
            button(Text::new(ctx.i18n.tr("lightbox-next")))
                .on_press_maybe(photo.next_enabled.then_some(Message::Next)),
        );

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(picture(ctx))
        .push(controls)
        .into()
}

fn picture<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &ctx.state.picture {
        Picture::Loading => {
            let mut column = Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(ctx.loading.spinner_glyph().to_string()).size(sizing::SPINNER),
                )
                .push(Text::new(ctx.i18n.tr("lightbox-loading")));
            if ctx.loading.timed_out() {
                column = column.push(Text::new(ctx.i18n.tr("lightbox-loading-slow")));
            }
            column.into()
        }
        Picture::Ready(image) => Image::new(image.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Picture::Placeholder { reference } => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.state.photo.title.as_str()).size(typography::TITLE_MD))
            .push(Text::new(ctx.i18n.tr("lightbox-placeholder")))
            .push(Text::new(reference.as_str()).size(typography::CAPTION))
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(placeholder_style)
        .into()
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}

fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::NIGHT_900.into()),
        text_color: Some(palette::VIOLET_500),
        ..container::Style::default()
    }
}
