// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::ImageResolutionError;
use crate::gallery::input::NavKey;
use crate::gallery::LoadTicket;
use crate::media::ImageData;
use crate::ui::{lightbox, tiles};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Tiles(tiles::Message),
    Lightbox(lightbox::Message),
    KeyPressed(NavKey),
    FingerPressed { x: f32 },
    FingerLifted { x: f32 },
    FingerLost,
    /// A lightbox image finished resolving.
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, ImageResolutionError>,
    },
    Tick(Instant), // Spinner animation while an image loads
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Memories document to load instead of the configured one.
    pub memories_path: Option<String>,
    /// Directory relative image references are resolved against.
    pub image_root: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LUNAR_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
