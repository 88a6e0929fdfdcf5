//! Bitmap text drawing for the legend and debug labels.
//!
//! Uses the const 8x8 glyphs from `font8x8` scaled up by an integer
//! factor, so no font files are loaded at runtime and the baked legend
//! is identical on every platform.

use font8x8::{UnicodeFonts, BASIC_FONTS};

use super::Canvas;

/// Side length of one unscaled glyph cell.
pub const GLYPH_SIZE: u32 = 8;

/// Draw `text` with its top-left corner at (x, y).
///
/// Each glyph pixel becomes a `scale` x `scale` block. Characters
/// without a glyph (outside basic ASCII) advance the cursor but draw
/// nothing.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i64, y: i64, scale: u32, shade: u8) {
    let advance = i64::from(GLYPH_SIZE * scale);
    let mut cursor = x;
    for c in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(c) {
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (1u8 << col) != 0 {
                        canvas.fill_rect(
                            cursor + i64::from(col * scale),
                            y + row as i64 * i64::from(scale),
                            scale,
                            scale,
                            shade,
                        );
                    }
                }
            }
        }
        cursor += advance;
    }
}

/// Pixel width of `text` at the given scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}
