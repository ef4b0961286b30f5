// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The corner mask was applied to a canvas of a different size.
    #[error("mask is {mask_w}x{mask_h} but canvas is {canvas_w}x{canvas_h}")]
    MaskSize {
        mask_w: u32,
        mask_h: u32,
        canvas_w: u32,
        canvas_h: u32,
    },

    /// Encoding or writing an output PNG failed.
    #[error("failed to write {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}
