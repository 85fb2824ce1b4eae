//! Recolor - Perceptual color replacement for raster images
//!
//! Pick a point on a decoded image and replace a perceptually-similar
//! set of pixels with a new color, in one of two modes:
//!
//! - **Flood fill**: only the contiguous region touching the picked
//!   point, stabilized by posterizing a disposable matching surface so
//!   antialiased edges do not break region connectivity
//! - **Global replace**: every pixel matching an accumulated, ordered
//!   table of color substitutions
//!
//! Both modes share the same Euclidean RGB distance metric with an
//! inclusive tolerance.
//!
//! # Example
//!
//! ```
//! use recolor::{Raster, color};
//! use recolor::fill::{DisplayPoint, DisplaySize, EditSession, PickOptions};
//!
//! let red = color::compose_rgb(255, 0, 0);
//! let raster = Raster::from_data(4, 4, vec![red; 16]).unwrap();
//! let mut session = EditSession::new(raster);
//!
//! let count = session
//!     .fill_at(
//!         DisplayPoint::new(0.0, 0.0),
//!         DisplaySize::new(4.0, 4.0),
//!         color::compose_rgb(0, 0, 255),
//!         &PickOptions::default(),
//!     )
//!     .unwrap();
//! assert_eq!(count, Some(16));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use recolor_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use recolor_fill as fill;
pub use recolor_io as io;
