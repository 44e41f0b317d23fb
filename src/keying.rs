//! Per-pixel black keying
//!
//! A pixel counts as background when each of its red, green and blue channels
//! is strictly below [`BLACK_THRESHOLD`]. Alpha is not consulted. Background
//! pixels become [`TRANSPARENT_WHITE`]; everything else is left alone.

use image::{Rgba, RgbaImage};

/// Exclusive per-channel upper bound for a pixel to count as black
pub const BLACK_THRESHOLD: u8 = 30;

/// Replacement written over every black pixel
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Pixel counts from one keying pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyingStats {
    /// Number of pixels visited
    pub total_pixels: u64,
    /// Number of pixels replaced with [`TRANSPARENT_WHITE`]
    pub keyed_pixels: u64,
}

impl KeyingStats {
    /// Fraction of pixels that were keyed out, 0.0 for an empty image
    pub fn keyed_ratio(&self) -> f64 {
        if self.total_pixels == 0 {
            0.0
        } else {
            self.keyed_pixels as f64 / self.total_pixels as f64
        }
    }
}

/// Threshold test: R, G and B all strictly below [`BLACK_THRESHOLD`]
#[inline]
pub fn is_background_black(pixel: &Rgba<u8>) -> bool {
    let Rgba([r, g, b, _]) = *pixel;
    r < BLACK_THRESHOLD && g < BLACK_THRESHOLD && b < BLACK_THRESHOLD
}

/// Replace every black pixel of `image` with [`TRANSPARENT_WHITE`] in place.
///
/// Dimensions and pixel order are untouched. Each pixel is decided from its
/// own value only, so the result does not depend on traversal order.
pub fn key_out_black(image: &mut RgbaImage) -> KeyingStats {
    let mut stats = KeyingStats::default();

    for pixel in image.pixels_mut() {
        stats.total_pixels += 1;
        if is_background_black(pixel) {
            *pixel = TRANSPARENT_WHITE;
            stats.keyed_pixels += 1;
        }
    }

    stats
}
