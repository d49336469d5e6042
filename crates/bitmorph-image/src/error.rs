/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the image has no pixels along one of its axes.
    #[error("Image size must be non-zero, got {0}x{1}")]
    EmptyImage(usize, usize),

    /// Error when the stride cannot be processed in whole words.
    #[error("Stride ({0}) must be a multiple of {1} bytes")]
    InvalidStrideAlignment(usize, usize),

    /// Error when the stride cannot hold a full row of pixels.
    #[error("Stride ({0}) is too small for a row of {1} pixels, needs at least {2} bytes")]
    StrideTooSmall(usize, usize, usize),

    /// Error when the data length does not match the image layout.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}
