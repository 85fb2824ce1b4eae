//! Recolor IO - Image I/O for the recolor library
//!
//! Decoding produces a [`Raster`](recolor_core::Raster) normalized to
//! four channels (full opacity where the source format has no alpha),
//! which is the invariant every downstream operation assumes. Encoding
//! is lossless 8-bit RGBA PNG, so edited images round-trip their
//! channels exactly.
//!
//! Saving the encoded bytes to their final destination (a filesystem
//! path, a download, ...) is the caller's concern; the path helpers here
//! are plain conveniences over the byte-level API.

pub mod error;
pub mod png;

// Re-export core types
pub use recolor_core;

// Re-export error types
pub use error::{IoError, IoResult};

// Re-export PNG entry points
pub use png::{decode_png, encode_png, read_png, write_png};

use recolor_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a PNG image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a raster to a file path as RGBA PNG.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}
