// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation over a [`GallerySequence`].
//!
//! The navigator is the single source of truth for which memory is shown.
//! Every operation returns an [`Effect`] describing what the rendering layer
//! must change; out-of-range or stale requests produce [`Effect::None`]
//! instead of an error.

use super::memory::{GallerySequence, MemoryItem};

/// Everything the lightbox needs to display one memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPhoto {
    /// 0-based index of the displayed item.
    pub index: usize,
    pub title: String,
    pub image: String,
    /// 1-based position shown in the counter.
    pub position: usize,
    pub total: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Presentation changes produced by a navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to render.
    None,
    /// Open (or update) the lightbox and start loading the image.
    Show(ShowPhoto),
    /// Hide the lightbox, restore page scrolling and clear the active tile.
    Hide,
}

impl Effect {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

/// Navigation intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(usize),
    Next,
    Previous,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigator {
    items: GallerySequence,
    current_index: Option<usize>,
}

impl Navigator {
    /// Starts a closed navigator over `items`.
    pub fn load(items: GallerySequence) -> Self {
        Self {
            items,
            current_index: None,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(index) => self.open(index),
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::Close => self.close(),
        }
    }

    pub fn open(&mut self, index: usize) -> Effect {
        if index >= self.items.len() {
            return Effect::None;
        }
        self.show(index)
    }

    pub fn next(&mut self) -> Effect {
        match self.current_index {
            Some(index) if index + 1 < self.items.len() => self.show(index + 1),
            _ => Effect::None,
        }
    }

    pub fn previous(&mut self) -> Effect {
        match self.current_index {
            Some(index) if index > 0 => self.show(index - 1),
            _ => Effect::None,
        }
    }

    pub fn close(&mut self) -> Effect {
        match self.current_index.take() {
            Some(_) => Effect::Hide,
            None => Effect::None,
        }
    }

    fn show(&mut self, index: usize) -> Effect {
        self.current_index = Some(index);
        let item = &self.items[index];
        let total = self.items.len();
        Effect::Show(ShowPhoto {
            index,
            title: item.title.clone(),
            image: item.image.clone(),
            position: index + 1,
            total,
            previous_enabled: index != 0,
            next_enabled: index != total - 1,
        })
    }

    #[must_use]
    pub fn items(&self) -> &GallerySequence {
        &self.items
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&MemoryItem> {
        self.current_index.and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current_index.is_some()
    }

    /// Whether the tile at `index` carries the active marker.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.current_index == Some(index)
    }
}
