// Whole-canvas operations: the background gradient, flattening onto a solid
// backdrop, and writing the finished buffers to disk.

use std::path::Path;

use image::{Pixel, Rgba, RgbaImage};

use crate::error::Error;

/// Paint a top-to-bottom gradient, one horizontal band per scanline.
/// Channel values interpolate as `start + (end - start) * y / height`,
/// truncated, so two adjacent rows may share a colour.
pub fn vertical_gradient(canvas: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    for y in 0..h {
        let t = y as f32 / h as f32;
        let mut band = [0u8; 4];
        for c in 0..4 {
            band[c] = (top[c] as f32 + (bottom[c] as f32 - top[c] as f32) * t) as u8;
        }
        let band = Rgba(band);
        for x in 0..w {
            canvas.put_pixel(x, y, band);
        }
    }
}

/// Composite `artwork` onto a solid `background` using the artwork's own
/// alpha channel. The result is fully opaque.
pub fn flatten_onto(background: Rgba<u8>, artwork: &RgbaImage) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(artwork.width(), artwork.height(), background);
    for (x, y, pixel) in artwork.enumerate_pixels() {
        out.get_pixel_mut(x, y).blend(pixel);
    }
    out
}

/// Write the buffer as PNG. The format keeps all four channels even when
/// every pixel is opaque.
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<(), Error> {
    canvas.save(path).map_err(|source| Error::Save {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("wrote {} ({}x{})", path.display(), canvas.width(), canvas.height());
    Ok(())
}
