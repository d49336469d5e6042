/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or write the file.
    #[error(transparent)]
    FileError(#[from] std::io::Error),

    /// Error to decode the PNG image.
    #[error("Failed to decode the PNG image. {0}")]
    PngDecodeError(#[from] png::DecodingError),

    /// Error to encode the PNG image.
    #[error("Failed to encode the PNG image. {0}")]
    PngEncodingError(#[from] png::EncodingError),

    /// Error when the image is not 1 bit per pixel.
    #[error("Only 1-bit PNG images are supported, got {0} bits per pixel")]
    UnsupportedBitDepth(u8),

    /// Error when the color type cannot hold a 1-bit image.
    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(String),

    /// Error to create the image.
    #[error(transparent)]
    ImageCreationError(#[from] bitmorph_image::ImageError),
}
