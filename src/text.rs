// Text rendering with two backends:
// 1) System TrueType faces, shaped and rasterized through cosmic-text.
// 2) A built-in scaled 5x7 bitmap font covering exactly the characters the
//    icon uses, for machines where the preferred family is not installed.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight, fontdb};
use image::{Rgba, RgbaImage};

use crate::draw;

/// A preferred system face: family name, weight and pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub family: &'static str,
    pub weight: u16,
    pub size: f32,
}

/// One resolved font slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Font {
    System(FontSpec),
    Builtin,
}

/// The five faces the icon is drawn with. Large and eyes are part of the
/// resolution contract even though the current artwork only draws with the
/// medium, small and symbols slots.
#[derive(Clone, Copy, Debug)]
pub struct FontSet {
    pub large: Font,
    pub medium: Font,
    pub small: Font,
    pub symbols: Font,
    pub eyes: Font,
}

const PREFERRED: [FontSpec; 5] = [
    FontSpec { family: "Arial", weight: 400, size: 120.0 }, // large
    FontSpec { family: "Arial", weight: 700, size: 64.0 },  // medium
    FontSpec { family: "Arial", weight: 700, size: 40.0 },  // small
    FontSpec { family: "Arial", weight: 400, size: 100.0 }, // symbols
    FontSpec { family: "Arial", weight: 700, size: 48.0 },  // eyes
];

impl FontSet {
    /// Resolve the preferred faces against the system font database.
    /// One miss fails the whole set to the builtin font, so the icon is
    /// always drawn with a single family.
    pub fn resolve(renderer: &TextRenderer) -> Self {
        if PREFERRED.iter().all(|spec| renderer.has_face(spec)) {
            Self {
                large: Font::System(PREFERRED[0]),
                medium: Font::System(PREFERRED[1]),
                small: Font::System(PREFERRED[2]),
                symbols: Font::System(PREFERRED[3]),
                eyes: Font::System(PREFERRED[4]),
            }
        } else {
            log::debug!("preferred font family unavailable, using builtin bitmap font");
            Self {
                large: Font::Builtin,
                medium: Font::Builtin,
                small: Font::Builtin,
                symbols: Font::Builtin,
                eyes: Font::Builtin,
            }
        }
    }
}

pub struct TextRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRenderer {
    /// Scans the system font directories once; everything after is lookups.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    fn has_face(&self, spec: &FontSpec) -> bool {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(spec.family)],
            weight: fontdb::Weight(spec.weight),
            ..fontdb::Query::default()
        };
        self.font_system.db().query(&query).is_some()
    }

    /// Width of `text` in pixels as it would render with `font`.
    pub fn measure(&mut self, text: &str, font: &Font) -> f32 {
        match font {
            Font::Builtin => builtin_width(text) as f32,
            Font::System(spec) => {
                let mut buffer = self.shape(text, spec);
                buffer.shape_until_scroll(&mut self.font_system, false);
                buffer.layout_runs().fold(0.0, |max_w, run| {
                    run.glyphs
                        .iter()
                        .fold(max_w, |w, glyph| (glyph.x + glyph.w).max(w))
                })
            }
        }
    }

    /// Draw `text` with its top-left corner at (x, y). The fill colour's own
    /// alpha scales the glyph coverage, so low-alpha fills come out faint.
    pub fn draw(
        &mut self,
        canvas: &mut RgbaImage,
        x: i32,
        y: i32,
        text: &str,
        font: &Font,
        color: Rgba<u8>,
    ) {
        match font {
            Font::Builtin => draw_builtin(canvas, x, y, text, color),
            Font::System(spec) => self.draw_system(canvas, x, y, text, spec, color),
        }
    }

    fn shape(&mut self, text: &str, spec: &FontSpec) -> Buffer {
        let attrs = Attrs::new()
            .family(Family::Name(spec.family))
            .weight(Weight(spec.weight));
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::relative(spec.size, 1.2));
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced);
        buffer
    }

    fn draw_system(
        &mut self,
        canvas: &mut RgbaImage,
        x: i32,
        y: i32,
        text: &str,
        spec: &FontSpec,
        color: Rgba<u8>,
    ) {
        let mut buffer = self.shape(text, spec);
        buffer.shape_until_scroll(&mut self.font_system, false);

        for run in buffer.layout_runs() {
            let baseline = run.line_y;
            for glyph in run.glyphs {
                let physical = glyph.physical((x as f32, y as f32), 1.0);
                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                else {
                    continue;
                };
                let glyph_x = physical.x + image.placement.left;
                let glyph_y = physical.y + baseline as i32 - image.placement.top;
                let glyph_w = image.placement.width as usize;
                if glyph_w == 0 {
                    continue;
                }
                for (i, &coverage) in image.data.iter().enumerate() {
                    if coverage == 0 {
                        continue;
                    }
                    let cx = (i % glyph_w) as i32;
                    let cy = (i / glyph_w) as i32;
                    let alpha = (coverage as u16 * color[3] as u16 / 255) as u8;
                    draw::blend_pixel(
                        canvas,
                        glyph_x + cx,
                        glyph_y + cy,
                        Rgba([color[0], color[1], color[2], alpha]),
                    );
                }
            }
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/* ---------- Builtin 5x7 bitmap font, scaled up for the 1024 px canvas ---------- */

const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;
/// One fixed scale regardless of the requested point size, like the default
/// font the original renderer fell back to.
const SCALE: i32 = 4;
/// Horizontal advance per character: glyph plus one column of spacing.
const ADVANCE: i32 = (GLYPH_W + 1) * SCALE;

/// Return a 5x7 glyph bitmap. Each u8 is a row; the low 5 bits are the
/// pixels (bit 4 = leftmost). Only the characters the icon draws exist.
fn glyph5x7(ch: char) -> Option<[u8; GLYPH_H as usize]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),

        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '×' => g!(0b00000,0b10001,0b01010,0b00100,0b01010,0b10001,0b00000),
        '÷' => g!(0b00000,0b00100,0b00000,0b11111,0b00000,0b00100,0b00000),
        'π' => g!(0b00000,0b11111,0b01010,0b01010,0b01010,0b01010,0b01011),
        '∑' => g!(0b11111,0b10000,0b01000,0b00100,0b01000,0b10000,0b11111),
        '%' => g!(0b11001,0b11010,0b00010,0b00100,0b01000,0b01011,0b10011),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

fn builtin_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        return 0;
    }
    n * ADVANCE - SCALE // drop the trailing spacing column
}

fn draw_builtin(canvas: &mut RgbaImage, mut x: i32, y: i32, text: &str, color: Rgba<u8>) {
    for ch in text.chars() {
        if let Some(rows) = glyph5x7(ch) {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..GLYPH_W {
                    if rowbits & (1 << (4 - rx)) != 0 {
                        // One glyph bit becomes a SCALE x SCALE block.
                        for by in 0..SCALE {
                            for bx in 0..SCALE {
                                draw::blend_pixel(
                                    canvas,
                                    x + rx * SCALE + bx,
                                    y + ry as i32 * SCALE + by,
                                    color,
                                );
                            }
                        }
                    }
                }
            }
        }
        x += ADVANCE;
    }
}
