// SPDX-License-Identifier: MPL-2.0
//! Resolving memory image references to decoded pixels.

use crate::error::ImageResolutionError;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Whether `reference` points at a remote resource.
#[must_use]
pub fn is_remote(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

/// Turns a memory image reference into a local path.
///
/// Relative references are joined onto `root` when one is configured.
pub fn resolve_path(
    root: Option<&Path>,
    reference: &str,
) -> Result<PathBuf, ImageResolutionError> {
    if is_remote(reference) {
        return Err(ImageResolutionError::Remote(reference.to_string()));
    }
    let path = Path::new(reference);
    Ok(match root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    })
}

/// Decodes the image at `path`.
pub fn decode_file(path: &Path) -> Result<ImageData, ImageResolutionError> {
    let bytes = std::fs::read(path).map_err(|e| ImageResolutionError::Io(e.to_string()))?;
    let img = image_rs::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Resolves and decodes a memory image after `reveal_delay`.
///
/// The delay is presentation pacing for the lightbox and is applied even for
/// references that are already cached by the OS.
pub async fn load_memory_image(
    root: Option<PathBuf>,
    reference: String,
    reveal_delay: Duration,
) -> Result<ImageData, ImageResolutionError> {
    if !reveal_delay.is_zero() {
        tokio::time::sleep(reveal_delay).await;
    }
    let path = resolve_path(root.as_deref(), &reference)?;
    tokio::task::spawn_blocking(move || decode_file(&path))
        .await
        .map_err(|e| ImageResolutionError::Io(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn remote_references_are_detected() {
        assert!(is_remote("https://example.com/a.jpg"));
        assert!(is_remote("HTTP://example.com/a.jpg"));
        assert!(is_remote("//cdn.example.com/a.jpg"));
        assert!(!is_remote("gallery/memory1.jpg"));
    }

    #[test]
    fn relative_reference_joins_root() {
        let path = resolve_path(Some(Path::new("/srv/site")), "gallery/memory1.jpg")
            .expect("local reference");
        assert_eq!(path, PathBuf::from("/srv/site/gallery/memory1.jpg"));
    }

    #[test]
    fn remote_reference_fails_to_resolve() {
        let err = resolve_path(None, "https://example.com/a.jpg").unwrap_err();
        assert!(matches!(err, ImageResolutionError::Remote(_)));
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = decode_file(&image_path).expect("png should load successfully");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn decode_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        match decode_file(&temp_dir.path().join("does_not_exist.png")) {
            Err(ImageResolutionError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn decode_invalid_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match decode_file(&bad_path) {
            Err(ImageResolutionError::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_memory_image_resolves_against_root() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("gallery")).expect("create gallery dir");
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]))
            .save(temp_dir.path().join("gallery/memory1.png"))
            .expect("write png");

        let data = load_memory_image(
            Some(temp_dir.path().to_path_buf()),
            "gallery/memory1.png".to_string(),
            Duration::ZERO,
        )
        .await
        .expect("image should load");
        assert_eq!(data.width, 3);
    }
}
