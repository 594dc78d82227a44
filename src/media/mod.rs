// SPDX-License-Identifier: MPL-2.0
//! Image loading for the lightbox.

pub mod image;

pub use image::{load_memory_image, ImageData};
