//! Recolor Fill - Color matching, region selection, and pixel mutation
//!
//! This crate is the algorithmic core of the recolor library:
//!
//! - **Posterization** ([`posterize`]): channel quantization that builds a
//!   disposable matching surface, collapsing antialiased gradients
//! - **Substitution table** ([`table`]): ordered source -> replacement
//!   mapping with first-qualifying-entry matching
//! - **Region selection** ([`region`]): connected flood fill from a seed,
//!   or a whole-raster sweep against the table
//! - **Application** ([`apply`]): in-place overwriting of selected pixels
//! - **Viewport mapping** ([`viewport`]): display point -> pixel indices
//! - **Recent colors** ([`recent`]): bounded MRU list of chosen colors
//! - **Session** ([`session`]): single owner of the loaded raster, driving
//!   a pick from coordinate resolution through mutation
//!
//! # Examples
//!
//! ```
//! use recolor_core::{Raster, color};
//! use recolor_fill::{DisplayPoint, DisplaySize, EditSession, PickOptions};
//!
//! let red = color::compose_rgb(255, 0, 0);
//! let raster = Raster::from_data(4, 4, vec![red; 16]).unwrap();
//! let mut session = EditSession::new(raster);
//!
//! let count = session
//!     .fill_at(
//!         DisplayPoint::new(0.0, 0.0),
//!         DisplaySize::new(4.0, 4.0),
//!         color::compose_rgb(0, 255, 0),
//!         &PickOptions::default(),
//!     )
//!     .unwrap();
//! assert_eq!(count, Some(16));
//! ```

pub mod apply;
pub mod error;
pub mod posterize;
pub mod recent;
pub mod region;
pub mod session;
pub mod table;
pub mod viewport;

// Re-export core types
pub use recolor_core;

// Re-export error types
pub use error::{FillError, FillResult};

// Re-export the main operation types and functions
pub use apply::{apply_color, apply_table};
pub use posterize::{posterize, posterize_in_place, posterize_pixel};
pub use recent::{RECENT_CAPACITY, RecentColors};
pub use region::{Region, connected_region, global_matches};
pub use session::{EditSession, PickOptions};
pub use table::SubstitutionTable;
pub use viewport::{DisplayPoint, DisplaySize, to_pixel};
