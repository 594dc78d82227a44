// SPDX-License-Identifier: MPL-2.0
//! Message handlers: turn input into navigator intents and apply the
//! resulting effects to the lightbox, load tracker and spinner.

use super::{App, Message};
use crate::error::ImageResolutionError;
use crate::gallery::input::{self, KeyOutcome, NavKey};
use crate::gallery::TapOutcome;
use crate::gallery::navigator::{self, Effect};
use crate::gallery::{LoadOutcome, LoadTicket};
use crate::media::{self, ImageData};
use crate::ui::{lightbox, loading, tiles};
use iced::Task;

pub(super) fn handle_tiles_message(app: &mut App, message: tiles::Message) -> Task<Message> {
    match message {
        tiles::Message::TilePressed(index) => navigate(app, navigator::Message::Open(index)),
    }
}

pub(super) fn handle_lightbox_message(app: &mut App, message: lightbox::Message) -> Task<Message> {
    let intent = match message {
        lightbox::Message::Previous => Some(navigator::Message::Previous),
        lightbox::Message::Next => Some(navigator::Message::Next),
        lightbox::Message::Close => Some(navigator::Message::Close),
        lightbox::Message::BackdropPressed => {
            app.backdrop.press();
            None
        }
        lightbox::Message::BackdropReleased => {
            match app.backdrop.release(app.swipe.is_tracking()) {
                TapOutcome::Tapped => input::backdrop_tapped(app.navigator.is_open()),
                TapOutcome::Ignored => None,
            }
        }
        lightbox::Message::BackdropScrolled => None,
    };
    match intent {
        Some(intent) => navigate(app, intent),
        None => Task::none(),
    }
}

pub(super) fn handle_key(app: &mut App, key: NavKey) -> Task<Message> {
    match input::key_pressed(key, app.navigator.is_open()) {
        KeyOutcome::Consumed(intent) => navigate(app, intent),
        KeyOutcome::Ignored => Task::none(),
    }
}

/// Ends a touch gesture: either a swipe, or the second half of a backdrop tap.
pub(super) fn handle_finger_lifted(app: &mut App, x: f32) -> Task<Message> {
    let swipe = app.swipe.lift(x);
    let tap = app.backdrop.lift(swipe.is_some());

    let intent = match swipe {
        Some(swipe) => input::swiped(swipe, app.navigator.is_open()),
        None if tap == TapOutcome::Tapped => {
            input::backdrop_tapped(app.navigator.is_open())
        }
        None => None,
    };
    match intent {
        Some(intent) => navigate(app, intent),
        None => Task::none(),
    }
}

pub(super) fn handle_image_loaded(
    app: &mut App,
    ticket: LoadTicket,
    result: Result<ImageData, ImageResolutionError>,
) {
    match app.loads.resolve(ticket, result) {
        LoadOutcome::Stale => {}
        LoadOutcome::Loaded(image) => {
            app.loading.handle(loading::Message::StopLoading);
            if let Some(state) = app.lightbox.as_mut() {
                state.picture = lightbox::Picture::Ready(image);
            }
        }
        LoadOutcome::Placeholder { reference, error } => {
            app.loading.handle(loading::Message::StopLoading);
            tracing::debug!(index = ticket.index, %error, "showing placeholder");
            if let Some(state) = app.lightbox.as_mut() {
                state.picture = lightbox::Picture::Placeholder { reference };
            }
        }
    }
}

/// Applies one navigator intent and renders its effect.
pub(super) fn navigate(app: &mut App, intent: navigator::Message) -> Task<Message> {
    let effect = app.navigator.handle(intent);
    apply_effect(app, effect)
}

fn apply_effect(app: &mut App, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Show(photo) => {
            tracing::debug!(index = photo.index, title = %photo.title, "showing memory");
            let ticket = app.loads.begin(photo.index, &photo.title);
            app.loading.handle(loading::Message::StartLoading);

            let load = media::load_memory_image(
                app.image_root.clone(),
                photo.image.clone(),
                app.reveal_delay,
            );
            app.lightbox = Some(lightbox::State::new(photo));

            Task::perform(load, move |result| Message::ImageLoaded { ticket, result })
        }
        Effect::Hide => {
            app.loads.cancel();
            app.loading.handle(loading::Message::StopLoading);
            app.swipe.cancel();
            app.backdrop.cancel();
            app.lightbox = None;
            Task::none()
        }
    }
}
