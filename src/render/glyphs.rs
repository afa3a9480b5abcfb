//! Built-in 5x7 bitmap glyphs for chart labels.
//!
//! Charts carry only short fixed labels (compass letters, the scale-bar
//! length, the survey name), so a tiny pixel font avoids shipping a font
//! file. Unknown characters advance the cursor without drawing.

use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Blank column between glyphs, in glyph pixels.
const TRACKING: u32 = 1;

/// Horizontal advance of one character at the given scale.
pub fn advance(scale: u32) -> i32 {
    ((GLYPH_WIDTH + TRACKING) * scale) as i32
}

/// Draw `text` with its top-left corner at `(x, y)`, each glyph pixel scaled
/// to a `scale` x `scale` block. Lowercase letters render as uppercase.
pub fn draw_text(image: &mut RgbImage, x: i32, y: i32, text: &str, scale: u32, color: Rgb<u8>) {
    let mut cursor = x;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch.to_ascii_uppercase()) {
            draw_glyph(image, cursor, y, &rows, scale, color);
        }
        cursor += advance(scale);
    }
}

fn draw_glyph(
    image: &mut RgbImage,
    x: i32,
    y: i32,
    rows: &[&'static str; 7],
    scale: u32,
    color: Rgb<u8>,
) {
    for (gy, row) in rows.iter().enumerate() {
        for (gx, bit) in row.bytes().enumerate() {
            if bit != b'1' {
                continue;
            }
            let px0 = x + (gx as u32 * scale) as i32;
            let py0 = y + (gy as u32 * scale) as i32;
            for dy in 0..scale as i32 {
                for dx in 0..scale as i32 {
                    let (px, py) = (px0 + dx, py0 + dy);
                    if px >= 0
                        && py >= 0
                        && (px as u32) < image.width()
                        && (py as u32) < image.height()
                    {
                        image.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}

#[rustfmt::skip]
fn glyph(c: char) -> Option<[&'static str; 7]> {
    let rows = match c {
        'A' => ["01110", "10001", "10001", "11111", "10001", "10001", "10001"],
        'B' => ["11110", "10001", "10001", "11110", "10001", "10001", "11110"],
        'C' => ["01110", "10001", "10000", "10000", "10000", "10001", "01110"],
        'D' => ["11110", "10001", "10001", "10001", "10001", "10001", "11110"],
        'E' => ["11111", "10000", "10000", "11110", "10000", "10000", "11111"],
        'F' => ["11111", "10000", "10000", "11110", "10000", "10000", "10000"],
        'G' => ["01110", "10001", "10000", "10111", "10001", "10001", "01111"],
        'H' => ["10001", "10001", "10001", "11111", "10001", "10001", "10001"],
        'I' => ["01110", "00100", "00100", "00100", "00100", "00100", "01110"],
        'J' => ["00111", "00010", "00010", "00010", "00010", "10010", "01100"],
        'K' => ["10001", "10010", "10100", "11000", "10100", "10010", "10001"],
        'L' => ["10000", "10000", "10000", "10000", "10000", "10000", "11111"],
        'M' => ["10001", "11011", "10101", "10101", "10001", "10001", "10001"],
        'N' => ["10001", "11001", "10101", "10011", "10001", "10001", "10001"],
        'O' => ["01110", "10001", "10001", "10001", "10001", "10001", "01110"],
        'P' => ["11110", "10001", "10001", "11110", "10000", "10000", "10000"],
        'Q' => ["01110", "10001", "10001", "10001", "10101", "10010", "01101"],
        'R' => ["11110", "10001", "10001", "11110", "10100", "10010", "10001"],
        'S' => ["01111", "10000", "10000", "01110", "00001", "00001", "11110"],
        'T' => ["11111", "00100", "00100", "00100", "00100", "00100", "00100"],
        'U' => ["10001", "10001", "10001", "10001", "10001", "10001", "01110"],
        'V' => ["10001", "10001", "10001", "10001", "10001", "01010", "00100"],
        'W' => ["10001", "10001", "10001", "10101", "10101", "11011", "10001"],
        'X' => ["10001", "01010", "00100", "00100", "00100", "01010", "10001"],
        'Y' => ["10001", "10001", "01010", "00100", "00100", "00100", "00100"],
        'Z' => ["11111", "00001", "00010", "00100", "01000", "10000", "11111"],
        '0' => ["01110", "10001", "10011", "10101", "11001", "10001", "01110"],
        '1' => ["00100", "01100", "00100", "00100", "00100", "00100", "01110"],
        '2' => ["01110", "10001", "00001", "00010", "00100", "01000", "11111"],
        '3' => ["11111", "00010", "00100", "00010", "00001", "10001", "01110"],
        '4' => ["00010", "00110", "01010", "10010", "11111", "00010", "00010"],
        '5' => ["11111", "10000", "11110", "00001", "00001", "10001", "01110"],
        '6' => ["00110", "01000", "10000", "11110", "10001", "10001", "01110"],
        '7' => ["11111", "00001", "00010", "00100", "01000", "01000", "01000"],
        '8' => ["01110", "10001", "10001", "01110", "10001", "10001", "01110"],
        '9' => ["01110", "10001", "10001", "01111", "00001", "00010", "01100"],
        '"' => ["01010", "01010", "01010", "00000", "00000", "00000", "00000"],
        '\'' => ["00100", "00100", "00100", "00000", "00000", "00000", "00000"],
        '.' => ["00000", "00000", "00000", "00000", "00000", "01100", "01100"],
        '-' => ["00000", "00000", "00000", "01110", "00000", "00000", "00000"],
        '+' => ["00000", "00100", "00100", "11111", "00100", "00100", "00000"],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn test_draw_text_sets_pixels() {
        let mut image = RgbImage::from_pixel(64, 16, BLACK);
        draw_text(&mut image, 2, 2, "E", 1, WHITE);

        // Top row of 'E' is fully lit.
        for gx in 0..GLYPH_WIDTH {
            assert_eq!(*image.get_pixel(2 + gx, 2), WHITE);
        }
        // Interior of the right edge is not.
        assert_eq!(*image.get_pixel(2 + 4, 3), BLACK);
    }

    #[test]
    fn test_scale_expands_glyph_blocks() {
        let mut image = RgbImage::from_pixel(64, 32, BLACK);
        draw_text(&mut image, 0, 0, "E", 3, WHITE);

        // The single top-row glyph pixel covers a 3x3 block.
        for dy in 0..3 {
            for dx in 0..3 {
                assert_eq!(*image.get_pixel(dx, dy), WHITE);
            }
        }
    }

    #[test]
    fn test_unknown_characters_advance_blank() {
        let mut image = RgbImage::from_pixel(64, 16, BLACK);
        draw_text(&mut image, 0, 0, "~E", 1, WHITE);

        // First cell stays blank, 'E' lands one advance to the right.
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        assert_eq!(*image.get_pixel(advance(1) as u32, 0), WHITE);
    }

    #[test]
    fn test_out_of_bounds_text_is_clipped() {
        let mut image = RgbImage::from_pixel(8, 8, BLACK);
        draw_text(&mut image, 6, 6, "WW", 2, WHITE);
        draw_text(&mut image, -3, -3, "W", 1, WHITE);
        // No panic is the assertion here.
    }
}
