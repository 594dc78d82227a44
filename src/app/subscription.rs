// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and touch events are translated into gallery input
//! messages here. Whether they navigate is decided in `update`, which knows
//! if the lightbox is open.

use super::Message;
use crate::gallery::input::NavKey;
use iced::{event, keyboard, time, touch, Event, Subscription};
use std::time::Duration;

/// Spinner frame interval while an image loads.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| map_event(&event))
}

fn map_event(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => nav_key(*named).map(Message::KeyPressed),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::FingerPressed { x: position.x })
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::FingerLifted { x: position.x })
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::FingerLost),
        _ => None,
    }
}

fn nav_key(named: keyboard::key::Named) -> Option<NavKey> {
    match named {
        keyboard::key::Named::ArrowLeft => Some(NavKey::ArrowLeft),
        keyboard::key::Named::ArrowRight => Some(NavKey::ArrowRight),
        keyboard::key::Named::Escape => Some(NavKey::Escape),
        _ => None,
    }
}

/// Periodic tick for the loading spinner; idle otherwise.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
