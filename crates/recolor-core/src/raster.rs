//! Raster - the image container
//!
//! The `Raster` structure is the fundamental image type in recolor.
//! It holds a dense W x H grid of packed 32-bit ARGB pixels.
//!
//! # Pixel layout
//!
//! - Each pixel is one `u32` in `0xAARRGGBB` order (alpha in the MSB)
//! - Rows are stored contiguously, row-major, no padding
//! - Every raster carries four channels; images decoded from formats
//!   with fewer channels are normalized to full opacity on load
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`. A scratch
//! copy derived for matching purposes (e.g. a posterized surface) is always
//! a deep copy and can never alias the authoritative buffer.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed ARGB pixels, row-major
    data: Vec<u32>,
}

/// Raster - immutable image container
///
/// `Raster` is the fundamental image type in recolor. It uses reference
/// counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use recolor_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the given dimensions.
    ///
    /// All pixels are initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data = vec![0u32; (width as usize) * (height as usize)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a raster from existing packed pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Check whether (x, y) lies inside the raster.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Get raw access to the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get a packed pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Get a single row of packed pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &self.inner.data[start..start + w]
    }

    /// Check if two rasters have the same dimensions.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new independent copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }

    /// Write raster metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl std::io::Write, label: Option<&str>) -> Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Raster Info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, pixels = {}",
            self.inner.width,
            self.inner.height,
            self.inner.data.len()
        )?;
        Ok(())
    }
}

/// Mutable raster
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`. Exclusive access is enforced at
/// compile time rather than by reference counting at runtime.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether (x, y) lies inside the raster.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Get raw access to the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get a packed pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Set a packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)] = val;
    }

    /// Set every pixel to the same packed value.
    pub fn fill(&mut self, val: u32) {
        self.inner.data.fill(val);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.pixel_count(), 20_000);
        assert!(raster.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_raster_creation_invalid() {
        assert!(Raster::new(0, 100).is_err());
        assert!(Raster::new(100, 0).is_err());
    }

    #[test]
    fn test_from_data() {
        let raster = Raster::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some(1));
        assert_eq!(raster.get_pixel(1, 1), Some(4));

        assert!(Raster::from_data(2, 2, vec![1, 2, 3]).is_err());
        assert!(Raster::from_data(0, 2, vec![]).is_err());
    }

    #[test]
    fn test_get_pixel_bounds() {
        let raster = Raster::new(10, 10).unwrap();
        assert_eq!(raster.get_pixel(9, 9), Some(0));
        assert_eq!(raster.get_pixel(10, 9), None);
        assert_eq!(raster.get_pixel(9, 10), None);
    }

    #[test]
    fn test_clone_shares_data() {
        let r1 = Raster::new(100, 100).unwrap();
        let r2 = r1.clone();

        assert_eq!(r1.ref_count(), 2);
        assert_eq!(r2.ref_count(), 2);
        assert_eq!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let r1 = Raster::new(100, 100).unwrap();
        let r2 = r1.deep_clone();

        assert_eq!(r1.ref_count(), 1);
        assert_eq!(r2.ref_count(), 1);
        assert_ne!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone_does_not_leak_mutations() {
        let raster = Raster::new(4, 4).unwrap();
        let mut scratch = raster.deep_clone().try_into_mut().unwrap();
        scratch.set_pixel(0, 0, 0xFFFF_0000).unwrap();

        assert_eq!(raster.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_try_into_mut() {
        let raster = Raster::new(10, 10).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_pixel(5, 5, 42).unwrap();

        let raster: Raster = rm.into();
        assert_eq!(raster.get_pixel(5, 5), Some(42));
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let r1 = Raster::new(10, 10).unwrap();
        let _r2 = r1.clone();
        assert!(r1.try_into_mut().is_err());
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let raster = Raster::new(10, 10).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        assert!(rm.set_pixel(10, 0, 1).is_err());
        assert!(rm.set_pixel(0, 10, 1).is_err());
    }

    #[test]
    fn test_fill() {
        let raster = Raster::new(3, 3).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.fill(0xFF00_FF00);
        let raster: Raster = rm.into();
        assert!(raster.data().iter().all(|&p| p == 0xFF00_FF00));
    }

    #[test]
    fn test_row_data() {
        let raster = Raster::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.row_data(0), &[1, 2, 3]);
        assert_eq!(raster.row_data(1), &[4, 5, 6]);
    }

    #[test]
    fn test_print_info() {
        let raster = Raster::new(100, 200).unwrap();
        let mut buf = Vec::new();
        raster.print_info(&mut buf, Some("sample")).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("sample"));
        assert!(output.contains("100"));
        assert!(output.contains("200"));
    }
}
