// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the gallery and the lightbox.
//!
//! Colors follow the community site's night palette. Spacing sits on an
//! 8px grid.
//!
//! ```
//! use lunar_gallery::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    /// Deep night purple behind images and placeholders.
    pub const NIGHT_900: Color = Color::from_rgb(
        0x1a as f32 / 255.0,
        0x0b as f32 / 255.0,
        0x2a as f32 / 255.0,
    );
    /// Accent violet used for placeholder text.
    pub const VIOLET_500: Color = Color::from_rgb(
        0x8a as f32 / 255.0,
        0x2b as f32 / 255.0,
        0xe2 as f32 / 255.0,
    );
}

pub mod opacity {
    /// Dimmed page behind the lightbox.
    pub const BACKDROP: f32 = 0.85;
}

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const TILE_HEIGHT: f32 = 120.0;
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1100.0;
    pub const SPINNER: f32 = 48.0;
}

pub mod typography {
    /// Page heading.
    pub const TITLE_LG: f32 = 32.0;
    /// Lightbox title.
    pub const TITLE_MD: f32 = 24.0;
    /// Tile labels.
    pub const TITLE_SM: f32 = 18.0;
    pub const CAPTION: f32 = 12.0;
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_palette_matches_placeholder_colors() {
        // The placeholder service URL encodes the same colors.
        let to_byte = |c: f32| (c * 255.0).round() as u8;
        assert_eq!(
            (
                to_byte(palette::NIGHT_900.r),
                to_byte(palette::NIGHT_900.g),
                to_byte(palette::NIGHT_900.b)
            ),
            (0x1a, 0x0b, 0x2a)
        );
        assert_eq!(
            (
                to_byte(palette::VIOLET_500.r),
                to_byte(palette::VIOLET_500.g),
                to_byte(palette::VIOLET_500.b)
            ),
            (0x8a, 0x2b, 0xe2)
        );
    }
}
