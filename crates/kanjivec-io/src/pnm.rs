//! PBM (Portable Bitmap) format support
//!
//! Reads P1 (ASCII) and P4 (packed binary) bitmaps and writes P4.
//! PBM's convention of 1 = black maps directly onto the `Bitmap` ink
//! bit, so no color translation is involved. Header comments (`#` to
//! end of line) are honored.

use crate::{IoError, IoResult};
use kanjivec_core::Bitmap;
use std::io::{BufRead, Write};

/// Cursor over the raw bytes of a PBM file.
struct Header<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Header<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments.
    fn skip_filler(&mut self) {
        while let Some(&byte) = self.data.get(self.pos) {
            if byte.is_ascii_whitespace() {
                self.pos += 1;
            } else if byte == b'#' {
                while let Some(&b) = self.data.get(self.pos) {
                    self.pos += 1;
                    if b == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Parse the next unsigned decimal field.
    fn next_number(&mut self) -> IoResult<u32> {
        self.skip_filler();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_digit())
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(IoError::InvalidData(
                "expected number in PBM header".to_string(),
            ));
        }
        let text = std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| IoError::InvalidData("non-ASCII PBM header".to_string()))?;
        text.parse()
            .map_err(|_| IoError::InvalidData(format!("bad PBM number {:?}", text)))
    }
}

/// Read a PBM image (P1 or P4).
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Bitmap> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let binary = match data.get(..2) {
        Some(b"P1") => false,
        Some(b"P4") => true,
        _ => {
            return Err(IoError::UnsupportedFormat(
                "not a PBM file (expected P1 or P4)".to_string(),
            ));
        }
    };

    let mut header = Header::new(&data[2..]);
    let width = header.next_number()?;
    let height = header.next_number()?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "degenerate PBM dimensions {}x{}",
            width, height
        )));
    }

    let mut bitmap = Bitmap::new(width, height)?;

    if binary {
        // Exactly one whitespace byte separates the header from the
        // packed raster
        let raster_start = 2 + header.pos + 1;
        let bytes_per_row = width.div_ceil(8) as usize;
        let needed = bytes_per_row * height as usize;
        let raster = data
            .get(raster_start..raster_start + needed)
            .ok_or_else(|| IoError::InvalidData("truncated PBM raster".to_string()))?;

        for y in 0..height {
            let row = &raster[y as usize * bytes_per_row..];
            for x in 0..width {
                let bit = (row[(x / 8) as usize] >> (7 - x % 8)) & 1;
                if bit != 0 {
                    bitmap.set_unchecked(x, y, true);
                }
            }
        }
    } else {
        // ASCII raster: a stream of 0/1 digits with arbitrary filler
        let mut cursor = Header::new(&data[2 + header.pos..]);
        for y in 0..height {
            for x in 0..width {
                cursor.skip_filler();
                match cursor.data.get(cursor.pos) {
                    Some(b'1') => bitmap.set_unchecked(x, y, true),
                    Some(b'0') => {}
                    other => {
                        return Err(IoError::InvalidData(format!(
                            "bad PBM raster byte {:?} at ({}, {})",
                            other.map(|&b| b as char),
                            x,
                            y
                        )));
                    }
                }
                cursor.pos += 1;
            }
        }
    }

    Ok(bitmap)
}

/// Write a bitmap as binary PBM (P4).
pub fn write_pnm<W: Write>(bitmap: &Bitmap, mut writer: W) -> IoResult<()> {
    let width = bitmap.width();
    let height = bitmap.height();

    writeln!(writer, "P4")?;
    writeln!(writer, "{} {}", width, height)?;

    let bytes_per_row = width.div_ceil(8) as usize;
    let mut row = vec![0u8; bytes_per_row];
    for y in 0..height {
        row.fill(0);
        for x in 0..width {
            if bitmap.get_unchecked(x, y) {
                row[(x / 8) as usize] |= 1 << (7 - x % 8);
            }
        }
        writer.write_all(&row)?;
    }

    Ok(())
}
