// SPDX-License-Identifier: MPL-2.0
//! `lunar_gallery` is a photo gallery of community memories built with the
//! Iced GUI framework.
//!
//! Memories are read from a JSON document (or a built-in fallback set) and
//! shown as a grid of tiles. Pressing a tile opens a lightbox that can be
//! navigated with buttons, arrow keys or horizontal swipes. The navigation
//! rules live in [`gallery`] and have no GUI dependency; [`app`] wires them
//! to Iced.

#![doc(html_root_url = "https://docs.rs/lunar_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
