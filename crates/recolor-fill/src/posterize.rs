//! Channel posterization
//!
//! Quantizes the R, G, B channels of a raster to a small number of
//! discrete levels. The flood-fill pipeline runs posterization on a
//! disposable deep copy so that antialiased edge gradients collapse into
//! flat regions: without it, a fill started on one side of a soft edge
//! leaks across it through sub-tolerance color drift at the boundary.
//!
//! The quantized surface is only ever a matching surface. It must never
//! be written back to the caller's buffer; color fidelity of the final
//! output is preserved by applying replacements to the original raster.

use crate::error::{FillError, FillResult};
use recolor_core::{Raster, RasterMut, color};

/// Quantize a single packed pixel.
///
/// Each of R, G, B is independently mapped with
/// `new = round(channel / step) * trunc(step)` where
/// `step = 255 / (levels - 1)`. Alpha passes through untouched.
#[inline]
pub fn posterize_pixel(pixel: u32, step: f64) -> u32 {
    let quant = |ch: u8| -> u8 { ((ch as f64 / step).round() * step.trunc()) as u8 };

    let (a, r, g, b) = color::extract_argb(pixel);
    color::compose_argb(a, quant(r), quant(g), quant(b))
}

/// Posterize a raster in place.
///
/// # Errors
///
/// Returns [`FillError::InvalidLevels`] if `levels < 2`; the step
/// formula is undefined there.
pub fn posterize_in_place(raster: &mut RasterMut, levels: u32) -> FillResult<()> {
    if levels < 2 {
        return Err(FillError::InvalidLevels(levels));
    }

    let step = 255.0 / (levels - 1) as f64;
    for pixel in raster.data_mut() {
        *pixel = posterize_pixel(*pixel, step);
    }
    Ok(())
}

/// Posterize into a new raster, leaving the source untouched.
///
/// The result is an independent deep copy; mutations to it can never
/// reach the source. Re-applying with the same level count is a no-op
/// up to rounding.
///
/// # Errors
///
/// Returns [`FillError::InvalidLevels`] if `levels < 2`.
pub fn posterize(raster: &Raster, levels: u32) -> FillResult<Raster> {
    let mut scratch = raster.to_mut();
    posterize_in_place(&mut scratch, levels)?;
    Ok(scratch.into())
}
