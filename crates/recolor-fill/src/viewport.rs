//! Display-space to buffer-space coordinate mapping
//!
//! A pick arrives in the coordinate space of whatever surface displays
//! the raster, which is usually scaled. The displayed size is passed in
//! explicitly by the caller; this module has no knowledge of any UI tree.

/// A pick point in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    /// Create a display point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The size at which the raster is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    /// Create a display size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Map a display-space point to buffer-space pixel indices.
///
/// Computes `px = floor(point.x * raster_width / display.width)` and the
/// analogous `py`. Returns `None` when the result falls outside
/// `[0, raster_width) x [0, raster_height)` — an expected outcome of
/// imprecise pointer input near the right/bottom boundary, not an error.
/// Non-positive or non-finite display dimensions also reject.
pub fn to_pixel(
    point: DisplayPoint,
    display: DisplaySize,
    raster_width: u32,
    raster_height: u32,
) -> Option<(u32, u32)> {
    if !(display.width > 0.0 && display.height > 0.0) {
        return None;
    }

    let px = (point.x * raster_width as f64 / display.width).floor();
    let py = (point.y * raster_height as f64 / display.height).floor();

    if px >= 0.0 && px < raster_width as f64 && py >= 0.0 && py < raster_height as f64 {
        Some((px as u32, py as u32))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(x: f64, y: f64) -> Option<(u32, u32)> {
        to_pixel(
            DisplayPoint::new(x, y),
            DisplaySize::new(100.0, 100.0),
            10,
            10,
        )
    }

    #[test]
    fn test_origin_maps_to_origin() {
        assert_eq!(map(0.0, 0.0), Some((0, 0)));
    }

    #[test]
    fn test_last_display_pixel_maps_to_last_cell() {
        assert_eq!(map(99.0, 99.0), Some((9, 9)));
    }

    #[test]
    fn test_boundary_rejected() {
        assert_eq!(map(100.0, 0.0), None);
        assert_eq!(map(0.0, 100.0), None);
        assert_eq!(map(150.0, 150.0), None);
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(map(-0.5, 0.0), None);
    }

    #[test]
    fn test_scaling() {
        // 10x10 raster shown at 50x200: display x in [0,5) is pixel 0
        let out = to_pixel(
            DisplayPoint::new(4.9, 20.0),
            DisplaySize::new(50.0, 200.0),
            10,
            10,
        );
        assert_eq!(out, Some((0, 1)));
    }

    #[test]
    fn test_degenerate_display_rejected() {
        let p = DisplayPoint::new(1.0, 1.0);
        assert_eq!(to_pixel(p, DisplaySize::new(0.0, 100.0), 10, 10), None);
        assert_eq!(to_pixel(p, DisplaySize::new(100.0, -5.0), 10, 10), None);
        assert_eq!(to_pixel(p, DisplaySize::new(f64::NAN, 100.0), 10, 10), None);
    }

    #[test]
    fn test_nan_point_rejected() {
        assert_eq!(map(f64::NAN, 0.0), None);
    }
}
