//! Embedded 5x7 bitmap font for tile labels
//!
//! Glyphs are stored as row art (`#` set, `.` clear) and scaled by an integer
//! factor when drawn. The charset covers ASCII letters, digits, space and the
//! punctuation found in element names and atomic masses.

use crate::io::error::{Result, WriterError};
use crate::render::layout::Rect;
use image::{Rgba, RgbaImage};

/// Glyph cell width in font pixels
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between consecutive glyph origins in font pixels
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

const ROWS: usize = GLYPH_HEIGHT as usize;

type GlyphArt = [&'static str; ROWS];

#[rustfmt::skip]
fn glyph_art(ch: char) -> Option<GlyphArt> {
    let art = match ch {
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        'F' => ["#####", "#....", "#....", "####.", "#....", "#....", "#...."],
        'G' => [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."],
        'J' => ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."],
        'K' => ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'M' => ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"],
        'N' => ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'P' => ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."],
        'Q' => [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'S' => [".####", "#....", "#....", ".###.", "....#", "....#", "####."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'U' => ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'V' => ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."],
        'X' => ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"],
        'Y' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."],
        'Z' => ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"],

        'a' => [".....", ".....", ".###.", "....#", ".####", "#...#", ".####"],
        'b' => ["#....", "#....", "#.##.", "##..#", "#...#", "#...#", "####."],
        'c' => [".....", ".....", ".###.", "#....", "#....", "#...#", ".###."],
        'd' => ["....#", "....#", ".##.#", "#..##", "#...#", "#...#", ".####"],
        'e' => [".....", ".....", ".###.", "#...#", "#####", "#....", ".###."],
        'f' => ["..##.", ".#..#", ".#...", "###..", ".#...", ".#...", ".#..."],
        'g' => [".....", ".####", "#...#", "#...#", ".####", "....#", ".###."],
        'h' => ["#....", "#....", "#.##.", "##..#", "#...#", "#...#", "#...#"],
        'i' => ["..#..", ".....", ".##..", "..#..", "..#..", "..#..", ".###."],
        'j' => ["...#.", ".....", "..##.", "...#.", "...#.", "#..#.", ".##.."],
        'k' => ["#....", "#....", "#..#.", "#.#..", "##...", "#.#..", "#..#."],
        'l' => [".##..", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."],
        'm' => [".....", ".....", "##.#.", "#.#.#", "#.#.#", "#...#", "#...#"],
        'n' => [".....", ".....", "#.##.", "##..#", "#...#", "#...#", "#...#"],
        'o' => [".....", ".....", ".###.", "#...#", "#...#", "#...#", ".###."],
        'p' => [".....", ".....", "####.", "#...#", "####.", "#....", "#...."],
        'q' => [".....", ".....", ".##.#", "#..##", ".####", "....#", "....#"],
        'r' => [".....", ".....", "#.##.", "##..#", "#....", "#....", "#...."],
        's' => [".....", ".....", ".###.", "#....", ".###.", "....#", "####."],
        't' => [".#...", ".#...", "###..", ".#...", ".#...", ".#..#", "..##."],
        'u' => [".....", ".....", "#...#", "#...#", "#...#", "#..##", ".##.#"],
        'v' => [".....", ".....", "#...#", "#...#", "#...#", ".#.#.", "..#.."],
        'w' => [".....", ".....", "#...#", "#...#", "#.#.#", "#.#.#", ".#.#."],
        'x' => [".....", ".....", "#...#", ".#.#.", "..#..", ".#.#.", "#...#"],
        'y' => [".....", ".....", "#...#", "#...#", ".####", "....#", ".###."],
        'z' => [".....", ".....", "#####", "...#.", "..#..", ".#...", "#####"],

        '0' => [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."],
        '4' => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        '5' => ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
        '6' => ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."],
        '7' => ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."],
        '8' => [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."],
        '9' => [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."],

        ' ' => [".....", ".....", ".....", ".....", ".....", ".....", "....."],
        '.' => [".....", ".....", ".....", ".....", ".....", ".##..", ".##.."],
        ',' => [".....", ".....", ".....", ".....", ".##..", "..#..", ".#..."],
        '-' => [".....", ".....", ".....", "#####", ".....", ".....", "....."],
        '\'' => ["..#..", "..#..", ".....", ".....", ".....", ".....", "....."],
        '(' => ["...#.", "..#..", ".#...", ".#...", ".#...", "..#..", "...#."],
        ')' => [".#...", "..#..", "...#.", "...#.", "...#.", "..#..", ".#..."],
        '[' => [".###.", ".#...", ".#...", ".#...", ".#...", ".#...", ".###."],
        ']' => [".###.", "...#.", "...#.", "...#.", "...#.", "...#.", ".###."],

        _ => return None,
    };
    Some(art)
}

/// A single decoded glyph, one bitmask per row with bit 4 as the leftmost column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; ROWS],
}

impl Glyph {
    /// Look up the glyph for a character
    pub fn for_char(ch: char) -> Option<Self> {
        let art = glyph_art(ch)?;
        let mut rows = [0u8; ROWS];
        for (mask, line) in rows.iter_mut().zip(art) {
            *mask = line
                .bytes()
                .fold(0u8, |acc, cell| (acc << 1) | u8::from(cell == b'#'));
        }
        Some(Self { rows })
    }

    /// Test whether the font pixel at (`col`, `row`) is set
    pub fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= GLYPH_WIDTH {
            return false;
        }
        self.rows
            .get(row as usize)
            .is_some_and(|mask| mask & (1 << (GLYPH_WIDTH - 1 - col)) != 0)
    }

    /// Number of set font pixels
    pub fn coverage(&self) -> u32 {
        self.rows.iter().map(|mask| mask.count_ones()).sum()
    }
}

/// Width in canvas pixels of `text` drawn at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        0
    } else {
        (count * GLYPH_ADVANCE - 1) * scale
    }
}

/// Height in canvas pixels of a line of text drawn at `scale`
pub const fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Decode every glyph of `text`
///
/// # Errors
///
/// Returns [`WriterError::MissingGlyph`] for the first character the font
/// doesn't cover
pub fn glyphs(text: &str) -> Result<Vec<Glyph>> {
    text.chars()
        .map(|ch| {
            Glyph::for_char(ch).ok_or_else(|| WriterError::MissingGlyph {
                character: ch,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Draw `text` with its top-left corner at (`x`, `y`), clipped to `clip`
///
/// Origins may lie outside the canvas; only pixels inside both `clip` and the
/// image are written.
///
/// # Errors
///
/// Returns [`WriterError::MissingGlyph`] if any character has no glyph; nothing
/// is drawn in that case
pub fn draw_text(
    image: &mut RgbaImage,
    text: &str,
    (x, y): (i64, i64),
    scale: u32,
    color: Rgba<u8>,
    clip: Rect,
) -> Result<()> {
    let decoded = glyphs(text)?;
    let step = i64::from(GLYPH_ADVANCE * scale);
    let scale_px = i64::from(scale);

    for (index, glyph) in decoded.iter().enumerate() {
        let glyph_x = x + index as i64 * step;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if !glyph.is_set(col, row) {
                    continue;
                }
                let cell_x = glyph_x + i64::from(col) * scale_px;
                let cell_y = y + i64::from(row) * scale_px;
                fill_clipped(image, (cell_x, cell_y), scale, color, clip);
            }
        }
    }

    Ok(())
}

// Writes one scaled font pixel
fn fill_clipped(
    image: &mut RgbaImage,
    (x, y): (i64, i64),
    size: u32,
    color: Rgba<u8>,
    clip: Rect,
) {
    for dy in 0..i64::from(size) {
        for dx in 0..i64::from(size) {
            let (px, py) = (x + dx, y + dy);
            if !clip.contains(px, py) {
                continue;
            }
            if let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) {
                if let Some(pixel) = image.get_pixel_mut_checked(px, py) {
                    *pixel = color;
                }
            }
        }
    }
}
