// Software drawing primitives over an RGBA canvas.
// Everything here is bounds-checked, so callers can hand in coordinates that
// run off the edge of the canvas without consequence.
//
// Bounding boxes (x0, y0, x1, y1) are inclusive on all four edges.

use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::error::Error;

/// Src-over blend `color` onto the pixel at (x, y), if it is inside bounds.
#[inline]
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let dst = canvas.get_pixel_mut(x, y);
    *dst = src_over(*dst, color);
}

/// Integer src-over with rounding. An opaque destination stays exactly
/// opaque, so blending faint overlays never erodes the corner mask's alpha.
fn src_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let inv = dst[3] as u32 * (255 - sa) / 255; // destination weight
    let out_a = sa + inv;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        out[c] = ((src[c] as u32 * sa + dst[c] as u32 * inv + out_a / 2) / out_a) as u8;
    }
    out[3] = out_a as u8;
    Rgba(out)
}

/// Fill the disc of radius `r` centred at (cx, cy).
fn fill_disc(canvas: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                blend_pixel(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Draw a line of the given stroke width between (x0,y0) and (x1,y1).
/// Bresenham walk with a disc stamped at every step; the stamps overlap,
/// so this is only for opaque colours.
pub fn thick_line(
    canvas: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    color: Rgba<u8>,
) {
    let r = width / 2;
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        fill_disc(canvas, x0, y0, r, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Fill the ellipse inscribed in the bounding box, one scanline at a time.
pub fn fill_ellipse(canvas: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let rx = (x1 - x0) as f32 / 2.0;
    let ry = (y1 - y0) as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    for y in y0..=y1 {
        let dy = (y as f32 - cy) / ry;
        let t = 1.0 - dy * dy;
        if t < 0.0 {
            continue;
        }
        let half = rx * t.sqrt();
        let xs = (cx - half).ceil() as i32;
        let xe = (cx + half).floor() as i32;
        for x in xs..=xe {
            blend_pixel(canvas, x, y, color);
        }
    }
}

/// Stroke an arc of the ellipse inscribed in the bounding box.
/// Angles are degrees clockwise from 3 o'clock in y-down screen space, so
/// 10..170 is the lower arc. The stroke grows inward from the box edge.
pub fn stroke_arc(
    canvas: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    start_deg: f32,
    end_deg: f32,
    width: i32,
    color: Rgba<u8>,
) {
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let half_w = width as f32 / 2.0;
    // Path radius sits half a stroke inside the bounding box.
    let rx = ((x1 - x0) as f32 / 2.0 - half_w).max(0.0);
    let ry = ((y1 - y0) as f32 / 2.0 - half_w).max(0.0);

    // Sample finely enough that consecutive stamps are under a pixel apart.
    let sweep = (end_deg - start_deg).to_radians().abs();
    let steps = (sweep * rx.max(ry)).ceil().max(1.0) as i32;
    for i in 0..=steps {
        let a = (start_deg + (end_deg - start_deg) * i as f32 / steps as f32).to_radians();
        let x = (cx + rx * a.cos()).round() as i32;
        let y = (cy + ry * a.sin()).round() as i32;
        fill_disc(canvas, x, y, width / 2, color);
    }
}

/// True when (x, y) falls inside the rounded rectangle: within the box and,
/// near a corner, within that corner's circle.
fn in_rounded_rect(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    let nx = x.clamp(x0 + radius, x1 - radius);
    let ny = y.clamp(y0 + radius, y1 - radius);
    let dx = x - nx;
    let dy = y - ny;
    dx * dx + dy * dy <= radius * radius
}

/// Fill a rounded rectangle.
pub fn fill_rounded_rect(
    canvas: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: Rgba<u8>,
) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            if in_rounded_rect(x, y, x0, y0, x1, y1, radius) {
                blend_pixel(canvas, x, y, color);
            }
        }
    }
}

/// Outline a rounded rectangle; the border runs inward from the outer edge.
pub fn stroke_rounded_rect(
    canvas: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    width: i32,
    color: Rgba<u8>,
) {
    let inner_r = (radius - width).max(0);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let outer = in_rounded_rect(x, y, x0, y0, x1, y1, radius);
            let inner = in_rounded_rect(
                x,
                y,
                x0 + width,
                y0 + width,
                x1 - width,
                y1 - width,
                inner_r,
            );
            if outer && !inner {
                blend_pixel(canvas, x, y, color);
            }
        }
    }
}

/// Build a single-channel mask: 255 inside the rounded rectangle covering the
/// whole buffer, 0 outside.
pub fn rounded_rect_mask(width: u32, height: u32, radius: i32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    let (x1, y1) = (width as i32 - 1, height as i32 - 1);
    for y in 0..height {
        for x in 0..width {
            if in_rounded_rect(x as i32, y as i32, 0, 0, x1, y1, radius) {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }
    mask
}

/// Replace the canvas alpha channel with the mask, clipping whatever was
/// drawn outside it regardless of prior colour.
pub fn apply_mask(canvas: &mut RgbaImage, mask: &GrayImage) -> Result<(), Error> {
    if canvas.dimensions() != mask.dimensions() {
        return Err(Error::MaskSize {
            mask_w: mask.width(),
            mask_h: mask.height(),
            canvas_w: canvas.width(),
            canvas_h: canvas.height(),
        });
    }
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        pixel[3] = mask.get_pixel(x, y)[0];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::new(w, h)
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn blend_pixel_ignores_out_of_bounds() {
        let mut canvas = blank(4, 4);
        blend_pixel(&mut canvas, -1, 0, RED);
        blend_pixel(&mut canvas, 0, -1, RED);
        blend_pixel(&mut canvas, 4, 0, RED);
        blend_pixel(&mut canvas, 0, 4, RED);
        assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn blend_pixel_is_src_over() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        blend_pixel(&mut canvas, 0, 0, Rgba([255, 255, 255, 128]));
        let p = canvas.get_pixel(0, 0);
        // Half-transparent white over opaque black: (255*128 + 0*127 + 127)/255.
        assert_eq!(p[0], 128);
        assert_eq!(p[3], 255);
    }

    #[test]
    fn blending_over_opaque_keeps_alpha_exactly_opaque() {
        // Every source alpha must leave an opaque destination opaque, or the
        // flattened icon would pick up sub-255 alpha under the faint symbols.
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([79, 70, 229, 255]));
        for alpha in [1, 25, 35, 128, 200, 254] {
            blend_pixel(&mut canvas, 0, 0, Rgba([255, 255, 255, alpha]));
            assert_eq!(canvas.get_pixel(0, 0)[3], 255, "src alpha {alpha}");
        }
    }

    #[test]
    fn blending_onto_transparent_keeps_source() {
        let mut canvas = blank(1, 1);
        blend_pixel(&mut canvas, 0, 0, Rgba([255, 255, 255, 35]));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([255, 255, 255, 35]));
    }

    #[test]
    fn rounded_rect_predicate_cuts_corners() {
        assert!(!in_rounded_rect(0, 0, 0, 0, 99, 99, 30));
        assert!(in_rounded_rect(50, 50, 0, 0, 99, 99, 30));
        // Edge midpoints are inside: the corner circles do not reach them.
        assert!(in_rounded_rect(50, 0, 0, 0, 99, 99, 30));
        assert!(in_rounded_rect(0, 50, 0, 0, 99, 99, 30));
    }

    #[test]
    fn ellipse_fills_centre_and_stays_in_box() {
        let mut canvas = blank(60, 60);
        fill_ellipse(&mut canvas, 10, 20, 49, 39, RED);
        assert_eq!(*canvas.get_pixel(30, 30), RED);
        for (x, y, p) in canvas.enumerate_pixels() {
            if p[3] != 0 {
                assert!((10..=49).contains(&(x as i32)), "x={x} y={y}");
                assert!((20..=39).contains(&(y as i32)), "x={x} y={y}");
            }
        }
    }

    #[test]
    fn arc_lower_half_has_ink_upper_half_does_not() {
        let mut canvas = blank(300, 300);
        // 10..170 degrees in y-down space is the bottom of the ellipse.
        stroke_arc(&mut canvas, 50, 50, 249, 249, 10.0, 170.0, 10, RED);
        let lower = canvas
            .enumerate_pixels()
            .any(|(_, y, p)| y > 200 && p[3] != 0);
        let upper = canvas
            .enumerate_pixels()
            .any(|(_, y, p)| y < 100 && p[3] != 0);
        assert!(lower);
        assert!(!upper);
    }

    #[test]
    fn thick_vertical_line_covers_stroke_width() {
        let mut canvas = blank(100, 100);
        thick_line(&mut canvas, 50, 20, 50, 80, 12, RED);
        assert_eq!(*canvas.get_pixel(50, 50), RED);
        assert_eq!(*canvas.get_pixel(45, 50), RED);
        assert_eq!(*canvas.get_pixel(55, 50), RED);
        assert_eq!(canvas.get_pixel(70, 50)[3], 0);
    }

    #[test]
    fn stroked_rounded_rect_leaves_interior_untouched() {
        let mut canvas = blank(200, 200);
        stroke_rounded_rect(&mut canvas, 20, 20, 179, 179, 40, 8, RED);
        assert_eq!(*canvas.get_pixel(100, 20), RED); // top edge
        assert_eq!(canvas.get_pixel(100, 100)[3], 0); // interior
        assert_eq!(canvas.get_pixel(21, 21)[3], 0); // clipped corner
    }

    #[test]
    fn mask_is_opaque_inside_and_clear_outside() {
        let mask = rounded_rect_mask(256, 256, 64);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(255, 255)[0], 0);
        assert_eq!(mask.get_pixel(128, 128)[0], 255);
        assert_eq!(mask.get_pixel(128, 0)[0], 255);
    }

    #[test]
    fn apply_mask_replaces_alpha() {
        let mut canvas = RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]));
        let mask = rounded_rect_mask(64, 64, 16);
        apply_mask(&mut canvas, &mask).unwrap();
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        // Colour survives even where alpha is cleared.
        assert_eq!(canvas.get_pixel(0, 0)[0], 10);
        assert_eq!(canvas.get_pixel(32, 32)[3], 255);
    }

    #[test]
    fn apply_mask_rejects_size_mismatch() {
        let mut canvas = blank(64, 64);
        let mask = rounded_rect_mask(32, 32, 8);
        assert!(apply_mask(&mut canvas, &mask).is_err());
    }
}
