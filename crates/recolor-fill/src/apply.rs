//! In-place color application
//!
//! Writes replacement colors into the authoritative raster once a
//! selection has been computed. All four channels of each selected pixel
//! are overwritten; the replacement's alpha is used, not the original
//! pixel's. Selections are bounds-checked at creation, so application
//! never touches out-of-bounds coordinates.

use crate::region::Region;
use crate::table::SubstitutionTable;
use recolor_core::RasterMut;

/// Overwrite every pixel in `region` with `replacement`.
pub fn apply_color(raster: &mut RasterMut, region: &Region, replacement: u32) {
    for &(x, y) in region.points() {
        raster.set_pixel_unchecked(x, y, replacement);
    }
}

/// Sweep the whole raster with an ordered substitution table.
///
/// The selection is fully computed before any channel is written, so a
/// replacement color that happens to match a later table entry cannot
/// cascade within one sweep. Returns the number of replaced pixels.
pub fn apply_table(raster: &mut RasterMut, table: &SubstitutionTable, tolerance: f64) -> u32 {
    let mut matches = Vec::new();
    if table.is_empty() {
        return 0;
    }

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let pixel = raster.get_pixel_unchecked(x, y);
            if let Some(replacement) = table.first_match(pixel, tolerance) {
                matches.push(((x, y), replacement));
            }
        }
    }

    for &((x, y), replacement) in &matches {
        raster.set_pixel_unchecked(x, y, replacement);
    }
    matches.len() as u32
}
