// SPDX-License-Identifier: MPL-2.0
//! Iced rendering adapter for the gallery.

pub mod design_tokens;
pub mod lightbox;
pub mod loading;
pub mod tiles;
