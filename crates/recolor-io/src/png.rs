//! PNG image format support
//!
//! Decoding normalizes every supported PNG layout to the library's
//! four-channel packed ARGB raster: grayscale and RGB images receive
//! full opacity, indexed images are expanded through their palette, and
//! 16-bit samples are truncated to their high byte. Encoding always
//! writes 8-bit RGBA, so a decoded-then-encoded RGBA image round-trips
//! every channel exactly.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use recolor_core::{Raster, color};
use std::io::{BufRead, Cursor, Seek, Write};

/// Read a PNG image into a raster.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] on malformed input (no raster is
/// created) and [`IoError::UnsupportedFormat`] for sample layouts the
/// library does not handle.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let palette = reader.info().palette.as_ref().map(|p| p.to_vec());

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity((width as usize) * (height as usize));

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One | BitDepth::Two | BitDepth::Four) => {
            let bits = bit_depth as u32;
            let per_byte = 8 / bits;
            let max = (1u32 << bits) - 1;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let byte = data[row_start + (x / per_byte) as usize];
                    let shift = 8 - bits * (x % per_byte + 1);
                    let val = ((byte >> shift) as u32) & max;
                    // Scale to the full 0-255 range
                    let g = (val * 255 / max) as u8;
                    pixels.push(color::compose_rgb(g, g, g));
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize];
                    pixels.push(color::compose_rgb(g, g, g));
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + (x as usize * 2)];
                    pixels.push(color::compose_rgb(g, g, g));
                }
            }
        }
        (ColorType::GrayscaleAlpha, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 4 } else { 2 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * samples);
                    let (g, a) = if bit_depth == BitDepth::Sixteen {
                        (data[idx], data[idx + 2])
                    } else {
                        (data[idx], data[idx + 1])
                    };
                    pixels.push(color::compose_argb(a, g, g, g));
                }
            }
        }
        (ColorType::Rgb, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 6 } else { 3 };
            let stride = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * samples);
                    let (r, g, b) = (data[idx], data[idx + stride], data[idx + 2 * stride]);
                    pixels.push(color::compose_rgb(r, g, b));
                }
            }
        }
        (ColorType::Rgba, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 8 } else { 4 };
            let stride = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * samples);
                    let (r, g, b, a) = (
                        data[idx],
                        data[idx + stride],
                        data[idx + 2 * stride],
                        data[idx + 3 * stride],
                    );
                    pixels.push(color::compose_argb(a, r, g, b));
                }
            }
        }
        (ColorType::Indexed, BitDepth::One | BitDepth::Two | BitDepth::Four | BitDepth::Eight) => {
            let palette = palette.ok_or_else(|| {
                IoError::DecodeError("indexed PNG without a palette".to_string())
            })?;
            let bits = bit_depth as u32;
            let per_byte = 8 / bits;
            let max = (1u32 << bits) - 1;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let byte = data[row_start + (x / per_byte) as usize];
                    let shift = 8 - bits * (x % per_byte + 1);
                    let index = (((byte >> shift) as u32) & max) as usize;
                    let entry = index * 3;
                    if entry + 2 >= palette.len() {
                        return Err(IoError::DecodeError(format!(
                            "palette index {} out of range",
                            index
                        )));
                    }
                    pixels.push(color::compose_rgb(
                        palette[entry],
                        palette[entry + 1],
                        palette[entry + 2],
                    ));
                }
            }
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    }

    Raster::from_data(width, height, pixels).map_err(IoError::Core)
}

/// Decode a PNG image from an in-memory byte slice.
pub fn decode_png(bytes: &[u8]) -> IoResult<Raster> {
    read_png(Cursor::new(bytes))
}

/// Write a raster as an 8-bit RGBA PNG.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(raster.pixel_count() * 4);
    for &pixel in raster.data() {
        let (a, r, g, b) = color::extract_argb(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}

/// Encode a raster to in-memory PNG bytes.
pub fn encode_png(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_png(raster, &mut bytes)?;
    Ok(bytes)
}
