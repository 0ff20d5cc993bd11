//! Per-pixel stroke-direction classification
//!
//! Each contour pixel is classified by its 3x3 neighborhood into one of
//! 12 stroke directions, or no direction at all if the neighborhood
//! leaves the raster or matches no known pattern. The neighborhood is
//! encoded as a 9-bit signature scanned row-major (top row left to
//! right, then middle, then bottom) with the most significant bit at the
//! top-left cell and set bits marking ink.

use kanjivec_core::Bitmap;

/// One of the 12 canonical stroke directions.
///
/// The first four are the principal directions; the rest are elbow
/// shapes that blend two principals and are named by the order their
/// halves appear in the pattern. Discriminants are stable and also serve
/// as display codes ('A' + code in [`DirectionMap`] dumps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// `-`
    Horizontal = 0,
    /// `|`
    Vertical = 1,
    /// `\`
    Backslash = 2,
    /// `/`
    Slash = 3,
    /// `-/`
    HorizontalSlash = 4,
    /// `/-`
    SlashHorizontal = 5,
    /// `\-`
    BackslashHorizontal = 6,
    /// `-\`
    HorizontalBackslash = 7,
    /// `/|`
    SlashVertical = 8,
    /// `|/`
    VerticalSlash = 9,
    /// `|\`
    VerticalBackslash = 10,
    /// `\|`
    BackslashVertical = 11,
}

/// One of the 4 coarse stroke categories the directions reduce into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Bucket {
    /// Horizontal strokes
    Horizontal = 0,
    /// Vertical strokes
    Vertical = 1,
    /// Backslash diagonals
    Backslash = 2,
    /// Forward-slash diagonals
    Slash = 3,
}

impl Bucket {
    /// Number of buckets.
    pub const COUNT: usize = 4;
}

impl Direction {
    /// Stable numeric code, 0..=11.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a 9-bit neighborhood signature in the direction table.
    ///
    /// The table is fixed: exactly 12 signatures are recognized, all
    /// others yield `None`.
    pub fn from_signature(sig: u16) -> Option<Direction> {
        use Direction::*;
        // Bits read like the 3x3 pattern itself, top-left first.
        match sig {
            0b000_111_000 => Some(Horizontal),          // WWW BBB WWW
            0b010_010_010 => Some(Vertical),            // WBW WBW WBW
            0b100_010_001 => Some(Backslash),           // BWW WBW WWB
            0b001_010_100 => Some(Slash),               // WWB WBW BWW
            0b001_110_000 => Some(HorizontalSlash),     // WWB BBW WWW
            0b000_011_100 => Some(SlashHorizontal),     // WWW WBB BWW
            0b100_011_000 => Some(BackslashHorizontal), // BWW WBB WWW
            0b000_110_001 => Some(HorizontalBackslash), // WWW BBW WWB
            0b010_010_100 => Some(SlashVertical),       // WBW WBW BWW
            0b001_010_010 => Some(VerticalSlash),       // WWB WBW WBW
            0b010_010_001 => Some(VerticalBackslash),   // WBW WBW WWB
            0b100_010_010 => Some(BackslashVertical),   // BWW WBW WBW
            _ => None,
        }
    }

    /// The coarse buckets this direction contributes to.
    ///
    /// Principal directions map to their own bucket; elbow shapes
    /// contribute to both of their halves.
    pub fn buckets(self) -> &'static [Bucket] {
        use Direction::*;
        match self {
            Horizontal => &[Bucket::Horizontal],
            Vertical => &[Bucket::Vertical],
            Backslash => &[Bucket::Backslash],
            Slash => &[Bucket::Slash],
            HorizontalSlash | SlashHorizontal => &[Bucket::Horizontal, Bucket::Slash],
            BackslashHorizontal | HorizontalBackslash => &[Bucket::Horizontal, Bucket::Backslash],
            SlashVertical | VerticalSlash => &[Bucket::Vertical, Bucket::Slash],
            VerticalBackslash | BackslashVertical => &[Bucket::Vertical, Bucket::Backslash],
        }
    }
}

/// Classify the stroke direction of a single pixel.
///
/// Builds the 9-bit signature of the 3x3 neighborhood centered at
/// (x, y) and looks it up in the direction table. If any neighborhood
/// cell falls outside the raster the pixel has no direction; there is no
/// partial matching.
pub fn classify_pixel(contour: &Bitmap, x: u32, y: u32) -> Option<Direction> {
    let w = contour.width() as i64;
    let h = contour.height() as i64;

    let mut sig = 0u16;
    for yo in -1..=1i64 {
        for xo in -1..=1i64 {
            let nx = x as i64 + xo;
            let ny = y as i64 + yo;
            if nx < 0 || nx >= w || ny < 0 || ny >= h {
                return None;
            }
            sig <<= 1;
            if contour.get_unchecked(nx as u32, ny as u32) {
                sig |= 1;
            }
        }
    }

    Direction::from_signature(sig)
}

/// Grid of per-pixel stroke directions, one-to-one with contour pixels.
#[derive(Debug, Clone)]
pub struct DirectionMap {
    width: u32,
    height: u32,
    dirs: Vec<Option<Direction>>,
}

impl DirectionMap {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Direction at (x, y); `None` for unclassified pixels and for
    /// coordinates outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Direction> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.dirs[(y * self.width + x) as usize]
    }
}

impl std::fmt::Display for DirectionMap {
    /// ASCII dump: one letter per classified pixel ('A' + code), blanks
    /// elsewhere, framed for alignment.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " {} ", "_".repeat(self.width as usize))?;
        for y in 0..self.height {
            write!(f, "|")?;
            for x in 0..self.width {
                match self.get(x, y) {
                    Some(dir) => write!(f, "{}", (b'A' + dir.code()) as char)?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, " {} ", "_".repeat(self.width as usize))
    }
}

/// Classify every pixel of a contour raster.
///
/// Pure per-pixel mapping; pixels within one cell of the border always
/// come out unclassified.
pub fn direction_map(contour: &Bitmap) -> DirectionMap {
    let width = contour.width();
    let height = contour.height();

    let mut dirs = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            dirs.push(classify_pixel(contour, x, y));
        }
    }

    DirectionMap {
        width,
        height,
        dirs,
    }
}
