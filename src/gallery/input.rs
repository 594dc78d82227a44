// SPDX-License-Identifier: MPL-2.0
//! Maps raw lightbox input to navigation intents.
//!
//! Keys, swipes and backdrop presses only navigate while the lightbox is
//! open. While open, the navigation keys are always consumed so the page
//! behind the overlay does not react to them.

use super::gesture::Swipe;
use super::navigator::Message;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// What to do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours; let the rest of the UI handle it.
    Ignored,
    /// Consumed, with the intent to apply.
    Consumed(Message),
}

#[must_use]
pub fn key_pressed(key: NavKey, is_open: bool) -> KeyOutcome {
    if !is_open {
        return KeyOutcome::Ignored;
    }
    let message = match key {
        NavKey::ArrowLeft => Message::Previous,
        NavKey::ArrowRight => Message::Next,
        NavKey::Escape => Message::Close,
    };
    KeyOutcome::Consumed(message)
}

#[must_use]
pub fn swiped(swipe: Swipe, is_open: bool) -> Option<Message> {
    if !is_open {
        return None;
    }
    Some(match swipe {
        Swipe::Left => Message::Next,
        Swipe::Right => Message::Previous,
    })
}

/// A tap on the overlay backdrop itself (not its content) closes it.
#[must_use]
pub fn backdrop_tapped(is_open: bool) -> Option<Message> {
    is_open.then_some(Message::Close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_ignored_while_closed() {
        for key in [NavKey::ArrowLeft, NavKey::ArrowRight, NavKey::Escape] {
            assert_eq!(key_pressed(key, false), KeyOutcome::Ignored);
        }
    }

    #[test]
    fn keys_map_to_intents_while_open() {
        assert_eq!(
            key_pressed(NavKey::ArrowLeft, true),
            KeyOutcome::Consumed(Message::Previous)
        );
        assert_eq!(
            key_pressed(NavKey::ArrowRight, true),
            KeyOutcome::Consumed(Message::Next)
        );
        assert_eq!(
            key_pressed(NavKey::Escape, true),
            KeyOutcome::Consumed(Message::Close)
        );
    }

    #[test]
    fn swipes_map_to_intents_while_open() {
        assert_eq!(swiped(Swipe::Left, true), Some(Message::Next));
        assert_eq!(swiped(Swipe::Right, true), Some(Message::Previous));
        assert_eq!(swiped(Swipe::Left, false), None);
    }

    #[test]
    fn backdrop_only_closes_an_open_lightbox() {
        assert_eq!(backdrop_tapped(true), Some(Message::Close));
        assert_eq!(backdrop_tapped(false), None);
    }
}
