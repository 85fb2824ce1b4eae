//! recolor-test - Regression test support for recolor
//!
//! Provides the [`RegParams`] check harness used by the `tests/*_reg.rs`
//! suites across the workspace, plus builders for the small synthetic
//! rasters those suites share.
//!
//! # Usage
//!
//! ```
//! use recolor_test::{RegParams, solid_raster};
//!
//! let mut rp = RegParams::new("example");
//! let raster = solid_raster(4, 4, 0xFFFF_0000);
//! rp.compare_values(16.0, raster.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use recolor_core::Raster;

/// Build a raster filled with a single packed color.
///
/// # Panics
///
/// Panics on zero dimensions; test fixtures are always non-empty.
pub fn solid_raster(width: u32, height: u32, pixel: u32) -> Raster {
    Raster::from_data(width, height, vec![pixel; (width * height) as usize])
        .expect("non-empty fixture dimensions")
}

/// Build a solid raster with one vertical column overridden.
///
/// # Panics
///
/// Panics if `column >= width` or on zero dimensions.
pub fn raster_with_column(
    width: u32,
    height: u32,
    background: u32,
    column: u32,
    column_pixel: u32,
) -> Raster {
    assert!(column < width, "column {column} outside width {width}");
    let mut data = vec![background; (width * height) as usize];
    for y in 0..height {
        data[(y * width + column) as usize] = column_pixel;
    }
    Raster::from_data(width, height, data).expect("non-empty fixture dimensions")
}
