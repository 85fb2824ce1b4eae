//! Region selection
//!
//! Computes the set of pixels a replacement will touch, using one of two
//! strategies: a connected-component flood fill grown from a seed pixel,
//! or a whole-raster scan against an ordered substitution table. Both use
//! the same distance-based matching primitive from `recolor_core::color`.
//!
//! Selection never mutates the raster it reads. The caller applies the
//! result afterwards (see [`crate::apply`]), so no partial mutation is
//! observable while a selection is being computed.

use crate::error::{FillError, FillResult};
use crate::table::SubstitutionTable;
use recolor_core::{Raster, color};
use std::collections::VecDeque;

/// A transient set of distinct in-bounds pixel coordinates produced by
/// one selection invocation.
#[derive(Debug, Clone, Default)]
pub struct Region {
    points: Vec<(u32, u32)>,
}

impl Region {
    /// Number of selected pixels.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the region is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The selected coordinates, in discovery order.
    pub fn points(&self) -> &[(u32, u32)] {
        &self.points
    }

    /// Linear-scan membership test (regions are small-lived; no index).
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.points.contains(&(x, y))
    }
}

/// Flood-fill the connected region of pixels similar to `target`.
///
/// Breadth-first search from the seed: the visited set and the FIFO
/// frontier both start with the seed, and a 4-connected neighbor (no
/// diagonals) joins iff it is in bounds, unvisited, and its distance to
/// `target` is within `tolerance` (inclusive). The seed is always a
/// member of the result, whatever its own color. Each cell enters the
/// frontier at most once, so the fill is O(W*H) and always terminates.
///
/// # Errors
///
/// Returns [`FillError::SeedOutOfBounds`] if the seed lies outside the
/// raster.
pub fn connected_region(
    raster: &Raster,
    seed_x: u32,
    seed_y: u32,
    target: u32,
    tolerance: f64,
) -> FillResult<Region> {
    let width = raster.width();
    let height = raster.height();
    if seed_x >= width || seed_y >= height {
        return Err(FillError::SeedOutOfBounds {
            x: seed_x,
            y: seed_y,
            width,
            height,
        });
    }

    let mut visited = vec![false; (width as usize) * (height as usize)];
    let index = |x: u32, y: u32| (y as usize) * (width as usize) + (x as usize);

    let mut points = Vec::new();
    let mut frontier = VecDeque::new();

    visited[index(seed_x, seed_y)] = true;
    points.push((seed_x, seed_y));
    frontier.push_back((seed_x, seed_y));

    while let Some((x, y)) = frontier.pop_front() {
        // 4-way neighbors; wrapping_sub drives 0-1 past the bounds check
        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if nx >= width || ny >= height {
                continue;
            }
            let i = index(nx, ny);
            if visited[i] {
                continue;
            }
            if color::matches_within(raster.get_pixel_unchecked(nx, ny), target, tolerance) {
                visited[i] = true;
                points.push((nx, ny));
                frontier.push_back((nx, ny));
            }
        }
    }

    Ok(Region { points })
}

/// Scan the whole raster against an ordered substitution table.
///
/// For every pixel in raster order, the first table entry (insertion
/// order) whose source color is within `tolerance` decides the pixel's
/// replacement; remaining entries are not consulted. Pixels matching no
/// entry are omitted. O(W*H*E) for E table entries.
///
/// Returns `(coordinate, replacement)` pairs; the raster is not mutated.
pub fn global_matches(
    raster: &Raster,
    table: &SubstitutionTable,
    tolerance: f64,
) -> Vec<((u32, u32), u32)> {
    let mut matches = Vec::new();
    if table.is_empty() {
        return matches;
    }

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let pixel = raster.get_pixel_unchecked(x, y);
            if let Some(replacement) = table.first_match(pixel, tolerance) {
                matches.push(((x, y), replacement));
            }
        }
    }
    matches
}
