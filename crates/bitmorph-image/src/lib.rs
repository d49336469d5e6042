#![deny(missing_docs)]
//! Image types for bit-packed binary images

/// bit-packed image representation.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{aligned_stride, clear_row_padding, min_stride, word_bytes};
pub use crate::image::{BitImage, ImageSize, WORD_BYTES};
