//! Procedural renderer for the application icon.
//!
//! Draws a robot face over an indigo gradient, clips the canvas to a
//! rounded rectangle, and writes two 1024x1024 PNGs: the opaque icon and
//! the transparent adaptive-icon foreground.

pub mod compose;
pub mod draw;
pub mod error;
pub mod icon;
pub mod palette;
pub mod text;

/// Edge length of both outputs in pixels.
pub const SIZE: u32 = 1024;
