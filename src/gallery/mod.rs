// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: memory data, lightbox navigation, input mapping and image
//! load bookkeeping. Nothing in here depends on the GUI toolkit.

pub mod gesture;
pub mod input;
pub mod loader;
pub mod memory;
pub mod navigator;

pub use gesture::{BackdropTap, Swipe, SwipeTracker, TapOutcome, SWIPE_THRESHOLD};
pub use loader::{placeholder_reference, LoadOutcome, LoadTicket, LoadTracker};
pub use memory::{GallerySequence, LoadedMemories, MemoryItem};
pub use navigator::{Effect, Navigator, ShowPhoto};
