//! Recolor Core - Basic data structures for perceptual color replacement
//!
//! This crate provides the fundamental pieces used throughout the
//! recolor image editing library:
//!
//! - [`Raster`] / [`RasterMut`] - The image container (immutable / mutable)
//! - [`color`] - Packed ARGB pixel helpers and the RGB distance metric
//! - [`Error`] / [`Result`] - Core error handling

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};

/// Channel helpers for 32-bit ARGB pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xAARRGGBB` (alpha in the MSB, blue in the LSB).
/// Two packed pixels are equal iff all four channels match; the distance
/// metric ignores the alpha channel.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract the alpha component from a packed pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract the red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract the green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract the blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed pixel from RGB components (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose a packed pixel from all four components.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract ARGB values from a packed pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    /// Euclidean distance between two pixels over the RGB channels.
    ///
    /// Computes `sqrt((r1-r2)^2 + (g1-g2)^2 + (b1-b2)^2)` in the 0-255
    /// channel domain. Alpha is excluded. Pure and symmetric.
    pub fn distance(a: u32, b: u32) -> f64 {
        let dr = red(a) as f64 - red(b) as f64;
        let dg = green(a) as f64 - green(b) as f64;
        let db = blue(a) as f64 - blue(b) as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Test whether two pixels match within a tolerance (inclusive).
    ///
    /// A negative tolerance matches nothing, since distance is never
    /// negative.
    #[inline]
    pub fn matches_within(a: u32, b: u32, tolerance: f64) -> bool {
        distance(a, b) <= tolerance
    }

}
