//! Overlay drawing for finding charts.
//!
//! All overlay geometry is fixed pixel offsets transcribed from the original
//! chart layout: it assumes the target lands at the cutout's center and does
//! not adapt to the returned image's pixel scale or dimensions. Positions are
//! given in plot convention (origin bottom-left, y up) and flipped once to
//! image rows.

pub mod glyphs;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};

pub mod colors {
    use image::Rgb;

    pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]); // target marker
    pub const RED: Rgb<u8> = Rgb([255, 0, 0]); // compass arrows
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]); // scale bar, labels
    pub const MAGENTA: Rgb<u8> = Rgb([255, 0, 255]); // cutout reticle
}

const MARKER_CENTER: (i32, i32) = (150, 150);
const MARKER_RADIUS: i32 = 8;

const COMPASS_ORIGIN: (i32, i32) = (270, 30);
const COMPASS_LENGTH: i32 = 50;
const ARROW_HEAD_WIDTH: i32 = 3;
const EAST_LABEL_POS: (i32, i32) = (220, 32);
const NORTH_LABEL_POS: (i32, i32) = (272, 80);

const SCALE_BAR_ORIGIN: (i32, i32) = (30, 30);
const SCALE_BAR_LENGTH: i32 = 100;
// Approximate angular length of the bar; not computed from the cutout.
const SCALE_BAR_LABEL: &str = "40\"";
const SCALE_LABEL_POS: (i32, i32) = (80, 34);

const SURVEY_LABEL_POS: (i32, i32) = (30, 270);
const LABEL_SCALE: u32 = 3;

// Reticle stroke offsets as fractions of the image width.
const RETICLE_INNER: f32 = 0.03;
const RETICLE_OUTER: f32 = 0.08;

/// Draw the full fixed overlay: target marker, compass arrows with E/N
/// labels, scale bar, and the survey name near the top-left.
pub fn annotate_chart(image: &mut RgbImage, survey: &str) {
    draw_marker(image);
    draw_compass(image);
    draw_scale_bar(image);
    draw_label(image, SURVEY_LABEL_POS, survey, colors::BLACK);
}

/// Crosshair strokes offset from the image center (one above, one to the
/// right), the shape the original finder-image plot draws for its reticle.
pub fn draw_reticle(image: &mut RgbImage) {
    let w = image.width() as f32;
    let h = image.height() as f32;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let inner = RETICLE_INNER * w;
    let outer = RETICLE_OUTER * w;

    for off in 0..2 {
        let off = off as f32;
        draw_line_segment_mut(
            image,
            (cx + off, cy - inner),
            (cx + off, cy - outer),
            colors::MAGENTA,
        );
        draw_line_segment_mut(
            image,
            (cx + inner, cy + off),
            (cx + outer, cy + off),
            colors::MAGENTA,
        );
    }
}

/// Plot-convention y to image row.
fn row(height: u32, y: i32) -> i32 {
    height as i32 - 1 - y
}

fn draw_marker(image: &mut RgbImage) {
    let cy = row(image.height(), MARKER_CENTER.1);
    draw_hollow_circle_mut(image, (MARKER_CENTER.0, cy), MARKER_RADIUS, colors::BLUE);
}

fn draw_compass(image: &mut RgbImage) {
    // East points left, north points up; lengths are illustrative.
    draw_arrow(image, COMPASS_ORIGIN, -COMPASS_LENGTH, 0, ARROW_HEAD_WIDTH, colors::RED);
    draw_arrow(image, COMPASS_ORIGIN, 0, COMPASS_LENGTH, ARROW_HEAD_WIDTH, colors::RED);
    draw_label(image, EAST_LABEL_POS, "E", colors::BLACK);
    draw_label(image, NORTH_LABEL_POS, "N", colors::BLACK);
}

fn draw_scale_bar(image: &mut RgbImage) {
    draw_arrow(image, SCALE_BAR_ORIGIN, SCALE_BAR_LENGTH, 0, 0, colors::BLACK);
    draw_label(image, SCALE_LABEL_POS, SCALE_BAR_LABEL, colors::BLACK);
}

/// Axis-aligned arrow from `from` (plot coords) with plot-space deltas
/// `(dx, dy)`. The shaft is two pixels wide; `head_width == 0` draws a bare
/// bar.
fn draw_arrow(
    image: &mut RgbImage,
    from: (i32, i32),
    dx: i32,
    dy: i32,
    head_width: i32,
    color: Rgb<u8>,
) {
    let h = image.height();
    let (x0, y0) = (from.0, row(h, from.1));
    let (x1, y1) = (from.0 + dx, row(h, from.1 + dy));

    draw_line_segment_mut(image, (x0 as f32, y0 as f32), (x1 as f32, y1 as f32), color);
    if y0 == y1 {
        draw_line_segment_mut(
            image,
            (x0 as f32, (y0 + 1) as f32),
            (x1 as f32, (y1 + 1) as f32),
            color,
        );
    } else {
        draw_line_segment_mut(
            image,
            ((x0 + 1) as f32, y0 as f32),
            ((x1 + 1) as f32, y1 as f32),
            color,
        );
    }

    if head_width > 0 {
        let (ux, uy) = ((x1 - x0).signum(), (y1 - y0).signum());
        let (bx, by) = (x1 - ux * 2 * head_width, y1 - uy * 2 * head_width);
        let (px, py) = (-uy, ux);
        draw_line_segment_mut(
            image,
            (x1 as f32, y1 as f32),
            ((bx + px * head_width) as f32, (by + py * head_width) as f32),
            color,
        );
        draw_line_segment_mut(
            image,
            (x1 as f32, y1 as f32),
            ((bx - px * head_width) as f32, (by - py * head_width) as f32),
            color,
        );
    }
}

/// Label text whose bottom edge sits at the given plot position.
fn draw_label(image: &mut RgbImage, pos: (i32, i32), text: &str, color: Rgb<u8>) {
    let top = row(image.height(), pos.1) - (glyphs::GLYPH_HEIGHT * LABEL_SCALE) as i32;
    glyphs::draw_text(image, pos.0, top, text, LABEL_SCALE, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKGROUND: Rgb<u8> = Rgb([80, 80, 80]);

    fn chart_canvas() -> RgbImage {
        RgbImage::from_pixel(300, 300, BACKGROUND)
    }

    #[test]
    fn test_marker_circle_position() {
        let mut image = chart_canvas();
        annotate_chart(&mut image, "DSS");

        // Hollow circle centered on (150, 150) in plot coords, radius 8.
        let cy = 299 - 150;
        assert_eq!(*image.get_pixel(158, cy as u32), colors::BLUE);
        assert_eq!(*image.get_pixel(142, cy as u32), colors::BLUE);
        // Center itself is untouched.
        assert_eq!(*image.get_pixel(150, cy as u32), BACKGROUND);
    }

    #[test]
    fn test_compass_arrows() {
        let mut image = chart_canvas();
        annotate_chart(&mut image, "DSS");

        // East arrow: leftward shaft at plot y=30.
        let y_east = (299 - 30) as u32;
        assert_eq!(*image.get_pixel(245, y_east), colors::RED);
        assert_eq!(*image.get_pixel(245, y_east + 1), colors::RED);
        // North arrow: upward shaft at x=270 between plot y 30 and 80.
        let y_mid = (299 - 55) as u32;
        assert_eq!(*image.get_pixel(270, y_mid), colors::RED);
    }

    #[test]
    fn test_scale_bar_is_headless() {
        let mut image = chart_canvas();
        draw_scale_bar(&mut image);

        let y_bar = (299 - 30) as u32;
        assert_eq!(*image.get_pixel(80, y_bar), colors::BLACK);
        assert_eq!(*image.get_pixel(130, y_bar), colors::BLACK);
        // Nothing beyond the bar's end.
        assert_eq!(*image.get_pixel(135, y_bar), BACKGROUND);
    }

    #[test]
    fn test_survey_label_near_top_left() {
        let mut image = chart_canvas();
        annotate_chart(&mut image, "DSS");

        // 'D' opens with a full-height left edge at x=30.
        let top = (299 - 270) - (glyphs::GLYPH_HEIGHT * LABEL_SCALE) as i32;
        assert_eq!(*image.get_pixel(30, top as u32), colors::BLACK);
    }

    #[test]
    fn test_annotation_positions_ignore_image_size() {
        // Oversized cutout: the overlay stays at the same offsets from the
        // bottom-left corner instead of scaling with the image.
        let mut image = RgbImage::from_pixel(600, 600, BACKGROUND);
        annotate_chart(&mut image, "DSS");

        let y_east = (599 - 30) as u32;
        assert_eq!(*image.get_pixel(245, y_east), colors::RED);
        assert_eq!(*image.get_pixel(158, (599 - 150) as u32), colors::BLUE);
    }

    #[test]
    fn test_reticle_strokes_offset_from_center() {
        let mut image = RgbImage::from_pixel(200, 200, BACKGROUND);
        draw_reticle(&mut image);

        // Vertical stroke above center, horizontal stroke to the right.
        assert_eq!(*image.get_pixel(100, 90), colors::MAGENTA);
        assert_eq!(*image.get_pixel(110, 100), colors::MAGENTA);
        // Center stays clear.
        assert_eq!(*image.get_pixel(100, 100), BACKGROUND);
        assert_eq!(*image.get_pixel(100, 110), BACKGROUND);
        assert_eq!(*image.get_pixel(90, 100), BACKGROUND);
    }
}
