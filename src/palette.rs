// Colours of the icon artwork. Names follow what each colour paints,
// not where it sits in the gradient of a design system.

use image::Rgba;

/// Top of the background gradient (#4F46E5); also the opaque backdrop.
pub const GRADIENT_TOP: Rgba<u8> = Rgba([79, 70, 229, 255]);
/// Bottom of the background gradient (#7C3AED).
pub const GRADIENT_BOTTOM: Rgba<u8> = Rgba([124, 58, 237, 255]);

/// Robot head fill.
pub const HEAD_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Head outline, antenna stem and ear panels (#C7D2FE).
pub const HEAD_BORDER: Rgba<u8> = Rgba([199, 210, 254, 255]);

/// Iris, smile and forehead text (#4F46E5).
pub const IRIS: Rgba<u8> = Rgba([79, 70, 229, 255]);
/// Pupils (#1E1B4B).
pub const PUPIL: Rgba<u8> = Rgba([30, 27, 75, 255]);
/// Eye highlights and the badge label.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Antenna ball and the "AI" badge (#34D399).
pub const MINT: Rgba<u8> = Rgba([52, 211, 153, 255]);
/// Highlight inside the antenna ball (#6EE7B7).
pub const MINT_LIGHT: Rgba<u8> = Rgba([110, 231, 183, 255]);

/// Faint white for the first four background math symbols.
pub const SYMBOL_FAINT: Rgba<u8> = Rgba([255, 255, 255, 35]);
/// Fainter white for the remaining two.
pub const SYMBOL_FAINTER: Rgba<u8> = Rgba([255, 255, 255, 25]);
