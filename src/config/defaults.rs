// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Delay before the lightbox swaps in a new image (in milliseconds).
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

/// Longest accepted reveal delay (in milliseconds).
pub const MAX_REVEAL_DELAY_MS: u64 = 5_000;

/// Default number of tiles per gallery row.
pub const DEFAULT_TILES_PER_ROW: u32 = 3;

/// Minimum tiles per row.
pub const MIN_TILES_PER_ROW: u32 = 1;

/// Maximum tiles per row.
pub const MAX_TILES_PER_ROW: u32 = 8;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_REVEAL_DELAY_MS <= MAX_REVEAL_DELAY_MS);

    assert!(MIN_TILES_PER_ROW > 0);
    assert!(MAX_TILES_PER_ROW >= MIN_TILES_PER_ROW);
    assert!(DEFAULT_TILES_PER_ROW >= MIN_TILES_PER_ROW);
    assert!(DEFAULT_TILES_PER_ROW <= MAX_TILES_PER_ROW);

    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
