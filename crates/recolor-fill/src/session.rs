//! Edit session
//!
//! Owns exactly one raster and drives a pick event from coordinate
//! resolution through buffer mutation. Loading a new image replaces the
//! buffer wholesale; the previous raster is dropped, never mutated into.
//! Each pick is handled synchronously and atomically: the selection is
//! fully computed before any pixel is written.

use crate::apply;
use crate::error::FillResult;
use crate::posterize::posterize;
use crate::recent::RecentColors;
use crate::region::connected_region;
use crate::table::SubstitutionTable;
use crate::viewport::{self, DisplayPoint, DisplaySize};
use recolor_core::{Raster, RasterMut};

/// Tunables for the flood-fill pick mode.
#[derive(Debug, Clone)]
pub struct PickOptions {
    /// Maximum color distance for a pixel to join the selection
    pub tolerance: f64,
    /// Posterization level count for the disposable matching surface
    pub posterize_levels: u32,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            posterize_levels: 16,
        }
    }
}

impl PickOptions {
    /// Set the matching tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the posterization level count.
    pub fn with_posterize_levels(mut self, levels: u32) -> Self {
        self.posterize_levels = levels;
        self
    }
}

/// An editing session over a single loaded raster.
///
/// The session is the one logical owner of the buffer: no locking is
/// needed because only one pixel-editing operation is ever in flight.
#[derive(Debug)]
pub struct EditSession {
    raster: Raster,
    table: SubstitutionTable,
    recent: RecentColors,
}

impl EditSession {
    /// Start a session over a loaded raster.
    pub fn new(raster: Raster) -> Self {
        Self {
            raster,
            table: SubstitutionTable::new(),
            recent: RecentColors::new(),
        }
    }

    /// Replace the buffer with a newly loaded raster.
    ///
    /// The previous raster is dropped. The substitution table belongs to
    /// the loaded image and is cleared; the recent-color list persists
    /// across loads.
    pub fn load(&mut self, raster: Raster) {
        self.raster = raster;
        self.table.clear();
    }

    /// The current raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Consume the session, yielding the raster.
    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// The accumulated substitution table for the current image.
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Recently finalized replacement colors, most recent first.
    pub fn recent_colors(&self) -> &RecentColors {
        &self.recent
    }

    /// Flood-fill pick: replace the contiguous region around the picked
    /// point with `replacement`.
    ///
    /// Resolves the display point to a pixel (an out-of-range pick
    /// returns `Ok(None)` with no state change), posterizes a disposable
    /// deep copy, flood-fills that copy from the seed against the seed's
    /// posterized color, then writes `replacement` into the original
    /// buffer at the selected coordinates. The posterized surface only
    /// stabilizes connectivity; it is never persisted.
    ///
    /// Returns the number of pixels written.
    pub fn fill_at(
        &mut self,
        point: DisplayPoint,
        display: DisplaySize,
        replacement: u32,
        options: &PickOptions,
    ) -> FillResult<Option<u32>> {
        let Some((x, y)) = viewport::to_pixel(point, display, self.raster.width(), self.raster.height())
        else {
            return Ok(None);
        };

        let scratch = posterize(&self.raster, options.posterize_levels)?;
        let target = scratch.get_pixel_unchecked(x, y);
        let region = connected_region(&scratch, x, y, target, options.tolerance)?;

        let mut rm = self.take_for_edit();
        apply::apply_color(&mut rm, &region, replacement);
        self.raster = rm.into();

        self.recent.record(replacement);
        Ok(Some(region.len() as u32))
    }

    /// Global pick: record `picked color -> replacement` and sweep the
    /// whole buffer with the accumulated table.
    ///
    /// The source key is the picked pixel's original color (no
    /// posterization in this mode). Re-picking a color already in the
    /// table updates its replacement in place; matching stays
    /// first-entry-wins in insertion order.
    ///
    /// Returns the number of pixels written, or `Ok(None)` for an
    /// out-of-range pick (no state change).
    pub fn replace_at(
        &mut self,
        point: DisplayPoint,
        display: DisplaySize,
        replacement: u32,
        tolerance: f64,
    ) -> FillResult<Option<u32>> {
        let Some((x, y)) = viewport::to_pixel(point, display, self.raster.width(), self.raster.height())
        else {
            return Ok(None);
        };

        let picked = self.raster.get_pixel_unchecked(x, y);
        self.table.insert(picked, replacement);

        let mut rm = self.take_for_edit();
        let count = apply::apply_table(&mut rm, &self.table, tolerance);
        self.raster = rm.into();

        self.recent.record(replacement);
        Ok(Some(count))
    }

    /// Take the buffer out for exclusive mutation.
    ///
    /// The session normally holds the only reference, so this avoids a
    /// copy; if a caller kept a `clone()` of the raster alive, mutation
    /// proceeds on an independent copy and the clone keeps its snapshot.
    fn take_for_edit(&mut self) -> RasterMut {
        // from_data(1, 1, ..) cannot fail: nonzero dims, matching length
        let placeholder = Raster::from_data(1, 1, vec![0]).unwrap();
        let owned = std::mem::replace(&mut self.raster, placeholder);
        owned.try_into_mut().unwrap_or_else(|shared| shared.to_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recolor_core::color::compose_rgb;

    fn solid(width: u32, height: u32, pixel: u32) -> Raster {
        Raster::from_data(width, height, vec![pixel; (width * height) as usize]).unwrap()
    }

    fn full_view(raster: &Raster) -> DisplaySize {
        DisplaySize::new(raster.width() as f64, raster.height() as f64)
    }

    #[test]
    fn test_fill_at_replaces_connected_region() {
        let red = compose_rgb(255, 0, 0);
        let blue = compose_rgb(0, 0, 255);
        let green = compose_rgb(0, 255, 0);

        let raster = solid(4, 4, red);
        let mut rm = raster.try_into_mut().unwrap();
        for y in 0..4 {
            rm.set_pixel(2, y, blue).unwrap();
        }
        let raster: Raster = rm.into();
        let display = full_view(&raster);

        let mut session = EditSession::new(raster);
        let count = session
            .fill_at(DisplayPoint::new(0.0, 0.0), display, green, &PickOptions::default())
            .unwrap();

        assert_eq!(count, Some(8));
        assert_eq!(session.raster().get_pixel(0, 0), Some(green));
        assert_eq!(session.raster().get_pixel(1, 3), Some(green));
        assert_eq!(session.raster().get_pixel(2, 0), Some(blue));
        assert_eq!(session.raster().get_pixel(3, 0), Some(red));
    }

    #[test]
    fn test_fill_at_out_of_range_pick_is_ignored() {
        let red = compose_rgb(255, 0, 0);
        let raster = solid(4, 4, red);
        let display = full_view(&raster);
        let mut session = EditSession::new(raster);

        let out = session
            .fill_at(
                DisplayPoint::new(4.0, 0.0),
                display,
                compose_rgb(0, 255, 0),
                &PickOptions::default(),
            )
            .unwrap();

        assert_eq!(out, None);
        assert!(session.raster().data().iter().all(|&p| p == red));
        assert!(session.recent_colors().is_empty());
    }

    #[test]
    fn test_fill_does_not_persist_posterized_values() {
        // Off-grid channel values survive in untouched pixels even though
        // the matching surface was posterized.
        let odd = compose_rgb(17, 203, 91);
        let far = compose_rgb(250, 10, 10);
        let raster = Raster::from_data(2, 1, vec![far, odd]).unwrap();
        let display = full_view(&raster);

        let mut session = EditSession::new(raster);
        let replacement = compose_rgb(1, 2, 3);
        session
            .fill_at(
                DisplayPoint::new(0.0, 0.0),
                display,
                replacement,
                &PickOptions::default().with_tolerance(5.0),
            )
            .unwrap();

        assert_eq!(session.raster().get_pixel(0, 0), Some(replacement));
        assert_eq!(session.raster().get_pixel(1, 0), Some(odd));
    }

    #[test]
    fn test_replace_at_sweeps_whole_buffer() {
        let red = compose_rgb(255, 0, 0);
        let blue = compose_rgb(0, 0, 255);
        let green = compose_rgb(0, 255, 0);

        // Disconnected red pixels in two corners
        let raster = Raster::from_data(3, 1, vec![red, blue, red]).unwrap();
        let display = full_view(&raster);
        let mut session = EditSession::new(raster);

        let count = session
            .replace_at(DisplayPoint::new(0.0, 0.0), display, green, 5.0)
            .unwrap();

        assert_eq!(count, Some(2));
        assert_eq!(session.raster().get_pixel(0, 0), Some(green));
        assert_eq!(session.raster().get_pixel(1, 0), Some(blue));
        assert_eq!(session.raster().get_pixel(2, 0), Some(green));
        assert_eq!(session.table().len(), 1);
    }

    #[test]
    fn test_replace_at_accumulates_table() {
        let red = compose_rgb(255, 0, 0);
        let blue = compose_rgb(0, 0, 255);
        let green = compose_rgb(0, 255, 0);
        let yellow = compose_rgb(255, 255, 0);

        let raster = Raster::from_data(2, 1, vec![red, blue]).unwrap();
        let display = full_view(&raster);
        let mut session = EditSession::new(raster);

        session
            .replace_at(DisplayPoint::new(0.0, 0.0), display, green, 1.0)
            .unwrap();
        session
            .replace_at(DisplayPoint::new(1.0, 0.0), display, yellow, 1.0)
            .unwrap();

        assert_eq!(session.table().len(), 2);
        assert_eq!(session.raster().get_pixel(0, 0), Some(green));
        assert_eq!(session.raster().get_pixel(1, 0), Some(yellow));
    }

    #[test]
    fn test_load_replaces_buffer_and_clears_table() {
        let red = compose_rgb(255, 0, 0);
        let green = compose_rgb(0, 255, 0);
        let raster = solid(2, 2, red);
        let display = full_view(&raster);
        let mut session = EditSession::new(raster);

        session
            .replace_at(DisplayPoint::new(0.0, 0.0), display, green, 1.0)
            .unwrap();
        assert_eq!(session.table().len(), 1);
        assert_eq!(session.recent_colors().colors(), &[green]);

        session.load(solid(3, 3, red));
        assert_eq!(session.raster().width(), 3);
        assert!(session.table().is_empty());
        // Recent colors persist across loads
        assert_eq!(session.recent_colors().colors(), &[green]);
    }

    #[test]
    fn test_caller_clone_keeps_snapshot() {
        let red = compose_rgb(255, 0, 0);
        let green = compose_rgb(0, 255, 0);
        let raster = solid(2, 2, red);
        let display = full_view(&raster);
        let mut session = EditSession::new(raster);

        let snapshot = session.raster().clone();
        session
            .fill_at(DisplayPoint::new(0.0, 0.0), display, green, &PickOptions::default())
            .unwrap();

        assert!(snapshot.data().iter().all(|&p| p == red));
        assert_eq!(session.raster().get_pixel(0, 0), Some(green));
    }
}
