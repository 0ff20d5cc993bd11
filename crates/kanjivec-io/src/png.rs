//! PNG image format support
//!
//! Decoding applies the single canonical ink rule: a pixel is
//! background only if every color sample is at full brightness; any
//! other value is ink. Alpha is ignored. Encoding writes 8-bit
//! grayscale with ink at 0x00 and background at 0xFF.

use crate::{IoError, IoResult};
use kanjivec_core::Bitmap;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as an ink mask.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Bitmap> {
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

    // Palette for indexed images, flattened RGB triples
    let palette: Option<Vec<u8>> = reader.info().palette.as_ref().map(|p| p.to_vec());

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut bitmap = Bitmap::new(width, height)?;

    // Fill in the ink pixels; everything else stays background
    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One | BitDepth::Two | BitDepth::Four) => {
            let bits = bit_depth as u32;
            let max = (1u8 << bits) - 1;
            let per_byte = 8 / bits;
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let byte = row[(x / per_byte) as usize];
                    let shift = 8 - bits * (x % per_byte + 1);
                    let val = (byte >> shift) & max;
                    if val != max {
                        bitmap.set_unchecked(x, y, true);
                    }
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    if row[x as usize] != 0xFF {
                        bitmap.set_unchecked(x, y, true);
                    }
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let idx = x as usize * 2;
                    let val = u16::from_be_bytes([row[idx], row[idx + 1]]);
                    if val != u16::MAX {
                        bitmap.set_unchecked(x, y, true);
                    }
                }
            }
        }
        (ColorType::GrayscaleAlpha | ColorType::Rgb | ColorType::Rgba, _) => {
            // Color samples per pixel, excluding alpha
            let (color_samples, total_samples) = match color_type {
                ColorType::GrayscaleAlpha => (1, 2),
                ColorType::Rgb => (3, 3),
                _ => (3, 4),
            };
            let wide = bit_depth == BitDepth::Sixteen;
            if !wide && bit_depth != BitDepth::Eight {
                return Err(IoError::UnsupportedFormat(format!(
                    "unsupported PNG format: {:?} {:?}",
                    color_type, bit_depth
                )));
            }
            let stride = total_samples * if wide { 2 } else { 1 };
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let base = x as usize * stride;
                    let ink = (0..color_samples).any(|s| {
                        if wide {
                            let idx = base + s * 2;
                            u16::from_be_bytes([row[idx], row[idx + 1]]) != u16::MAX
                        } else {
                            row[base + s] != 0xFF
                        }
                    });
                    if ink {
                        bitmap.set_unchecked(x, y, true);
                    }
                }
            }
        }
        (ColorType::Indexed, BitDepth::One | BitDepth::Two | BitDepth::Four | BitDepth::Eight) => {
            let palette = palette.ok_or_else(|| {
                IoError::DecodeError("indexed PNG without palette".to_string())
            })?;
            let bits = bit_depth as u32;
            let mask = ((1u16 << bits) - 1) as u8;
            let per_byte = 8 / bits;
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let byte = row[(x / per_byte) as usize];
                    let shift = 8 - bits * (x % per_byte + 1);
                    let index = ((byte >> shift) & mask) as usize;
                    let rgb = palette.get(index * 3..index * 3 + 3).ok_or_else(|| {
                        IoError::DecodeError(format!("palette index {} out of range", index))
                    })?;
                    if rgb != [0xFF, 0xFF, 0xFF] {
                        bitmap.set_unchecked(x, y, true);
                    }
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

    Ok(bitmap)
}

/// Write an ink mask as an 8-bit grayscale PNG.
pub fn write_png<W: Write>(bitmap: &Bitmap, writer: W) -> IoResult<()> {
    let width = bitmap.width();
    let height = bitmap.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = vec![0xFFu8; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            if bitmap.get_unchecked(x, y) {
                data[(y * width + x) as usize] = 0x00;
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut bitmap = Bitmap::new(16, 16).unwrap();
        for i in 0..16 {
            bitmap.set(i, i, true).unwrap();
        }

        let mut buffer = Vec::new();
        write_png(&bitmap, &mut buffer).unwrap();

        let restored = read_png(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(restored, bitmap);
    }

    #[test]
    fn test_gray_midtones_are_ink() {
        // Only pure white maps to background
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 3, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0x00, 0x80, 0xFF]).unwrap();
        }

        let bitmap = read_png(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(bitmap.get(0, 0), Some(true));
        assert_eq!(bitmap.get(1, 0), Some(true));
        assert_eq!(bitmap.get(2, 0), Some(false));
    }

    #[test]
    fn test_rgb_white_is_background() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[0xFF, 0xFF, 0xFF, 0x20, 0xFF, 0xFF])
                .unwrap();
        }

        let bitmap = read_png(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(bitmap.get(0, 0), Some(false));
        assert_eq!(bitmap.get(1, 0), Some(true));
    }

    #[test]
    fn test_bad_stream() {
        assert!(matches!(
            read_png(std::io::Cursor::new(&b"not a png"[..])),
            Err(IoError::DecodeError(_))
        ));
    }
}
