//! Ordered color substitution table
//!
//! Maps source colors to replacement colors for the whole-image replace
//! mode. Insertion order is significant: matching scans entries in the
//! order they were first inserted, and the first entry whose source color
//! lies within tolerance of a pixel wins — not the numerically closest
//! one. When tolerances overlap this can differ from user intuition, but
//! it is the documented policy.

use recolor_core::color;

/// Ordered mapping from source color to replacement color.
///
/// Keys are unique. Re-inserting an existing source color updates its
/// replacement in place; the entry keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: Vec<(u32, u32)>,
}

impl SubstitutionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a substitution, or update an existing one in place.
    ///
    /// If `source` is already present its replacement is overwritten but
    /// its position in the matching order is kept.
    pub fn insert(&mut self, source: u32, replacement: u32) {
        for entry in &mut self.entries {
            if entry.0 == source {
                entry.1 = replacement;
                return;
            }
        }
        self.entries.push((source, replacement));
    }

    /// Get the replacement recorded for an exact source color.
    pub fn get(&self, source: u32) -> Option<u32> {
        self.entries
            .iter()
            .find(|&&(src, _)| src == source)
            .map(|&(_, rep)| rep)
    }

    /// The entries in matching order.
    pub fn entries(&self) -> &[(u32, u32)] {
        &self.entries
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Find the replacement for a pixel: the first entry in insertion
    /// order whose source color is within `tolerance` of the pixel.
    ///
    /// Returns `None` when no entry qualifies.
    pub fn first_match(&self, pixel: u32, tolerance: f64) -> Option<u32> {
        self.entries
            .iter()
            .find(|&&(src, _)| color::matches_within(pixel, src, tolerance))
            .map(|&(_, rep)| rep)
    }
}
