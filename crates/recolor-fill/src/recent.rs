//! Bounded most-recently-used replacement color list
//!
//! A small UI convenience with exact semantics: front is most recent,
//! capacity is fixed, and recording a color already present leaves the
//! list untouched (no re-promotion to the front).

/// Maximum number of colors retained.
pub const RECENT_CAPACITY: usize = 5;

/// Bounded MRU list of packed replacement colors, front = most recent.
#[derive(Debug, Clone, Default)]
pub struct RecentColors {
    colors: Vec<u32>,
}

impl RecentColors {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored colors (at most [`RECENT_CAPACITY`]).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check whether no colors are stored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Record a chosen color.
    ///
    /// If `color` is already present (by value) the list is unchanged.
    /// Otherwise it is inserted at the front and the oldest entries are
    /// dropped until at most [`RECENT_CAPACITY`] remain.
    pub fn record(&mut self, color: u32) {
        if self.colors.contains(&color) {
            return;
        }
        self.colors.insert(0, color);
        self.colors.truncate(RECENT_CAPACITY);
    }

    /// The stored colors, front (most recent) to back.
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }
}
