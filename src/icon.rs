// The icon scene. Every call below runs unconditionally in fixed z-order;
// later draws occlude earlier ones.

use image::RgbaImage;

use crate::SIZE;
use crate::compose;
use crate::draw;
use crate::error::Error;
use crate::palette;
use crate::text::{FontSet, TextRenderer};

/// Corner radius of the icon's rounded-rectangle silhouette.
pub const CORNER_RADIUS: i32 = 220;

const HALF: i32 = SIZE as i32 / 2;

/// Render the transparent artwork: gradient background clipped to rounded
/// corners, faint math symbols, the robot face, and the two text overlays.
pub fn render(text: &mut TextRenderer, fonts: &FontSet) -> Result<RgbaImage, Error> {
    let mut canvas = RgbaImage::new(SIZE, SIZE);

    // Background gradient, then clip the corners before anything sits on top.
    compose::vertical_gradient(&mut canvas, palette::GRADIENT_TOP, palette::GRADIENT_BOTTOM);
    let mask = draw::rounded_rect_mask(SIZE, SIZE, CORNER_RADIUS);
    draw::apply_mask(&mut canvas, &mask)?;

    // Math symbols scattered behind the face.
    text.draw(&mut canvas, 120, 130, "+", &fonts.symbols, palette::SYMBOL_FAINT);
    text.draw(&mut canvas, 780, 160, "×", &fonts.symbols, palette::SYMBOL_FAINT);
    text.draw(&mut canvas, 90, 760, "÷", &fonts.symbols, palette::SYMBOL_FAINT);
    text.draw(&mut canvas, 800, 790, "π", &fonts.symbols, palette::SYMBOL_FAINT);
    text.draw(&mut canvas, 140, 460, "∑", &fonts.symbols, palette::SYMBOL_FAINTER);
    text.draw(&mut canvas, 810, 490, "%", &fonts.symbols, palette::SYMBOL_FAINTER);

    // Head with its border.
    draw::fill_rounded_rect(&mut canvas, 270, 280, 754, 700, 80, palette::HEAD_FILL);
    draw::stroke_rounded_rect(&mut canvas, 270, 280, 754, 700, 80, 8, palette::HEAD_BORDER);

    // Antenna stem and ball.
    draw::thick_line(&mut canvas, HALF, 280, HALF, 200, 12, palette::HEAD_BORDER);
    draw::fill_ellipse(&mut canvas, HALF - 25, 160, HALF + 25, 210, palette::MINT);
    draw::fill_ellipse(&mut canvas, HALF - 12, 173, HALF + 12, 197, palette::MINT_LIGHT);

    // Left eye: iris, highlight, pupil. The pupil overlaps most of the
    // highlight; that is the source artwork, not an accident.
    draw::fill_ellipse(&mut canvas, 345, 405, 455, 515, palette::IRIS);
    draw::fill_ellipse(&mut canvas, 378, 440, 414, 476, palette::WHITE);
    draw::fill_ellipse(&mut canvas, 380, 440, 420, 480, palette::PUPIL);

    // Right eye, mirrored 224 px across.
    draw::fill_ellipse(&mut canvas, 569, 405, 679, 515, palette::IRIS);
    draw::fill_ellipse(&mut canvas, 602, 440, 638, 476, palette::WHITE);
    draw::fill_ellipse(&mut canvas, 604, 440, 644, 480, palette::PUPIL);

    // Smile.
    draw::stroke_arc(&mut canvas, 400, 510, 624, 640, 10.0, 170.0, 14, palette::IRIS);

    // Ear panels.
    draw::fill_rounded_rect(&mut canvas, 228, 410, 278, 510, 20, palette::HEAD_BORDER);
    draw::fill_rounded_rect(&mut canvas, 746, 410, 796, 510, 20, palette::HEAD_BORDER);

    // "1+1" on the forehead, centred on the canvas midline.
    let width = text.measure("1+1", &fonts.medium).round() as i32;
    text.draw(&mut canvas, HALF - width / 2, 310, "1+1", &fonts.medium, palette::IRIS);

    // "AI" badge below the face.
    draw::fill_rounded_rect(&mut canvas, 430, 740, 594, 804, 32, palette::MINT);
    let width = text.measure("AI", &fonts.small).round() as i32;
    text.draw(&mut canvas, HALF - width / 2, 752, "AI", &fonts.small, palette::WHITE);

    Ok(canvas)
}
