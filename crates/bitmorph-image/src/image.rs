use crate::error::ImageError;

/// Number of bytes in the word used by the row kernels.
///
/// Every image stride is a multiple of this value so rows can be processed in
/// whole 64-bit chunks.
pub const WORD_BYTES: usize = 8;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use bitmorph_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A binary image packed 8 pixels per byte.
///
/// Pixel `x` of row `y` lives in byte `y * stride + x / 8` at bit `7 - x % 8`,
/// so pixels run most-significant-bit first and left to right across
/// increasing byte addresses. A set bit is foreground.
///
/// The stride is always a multiple of [`WORD_BYTES`] and the bits at
/// `x >= width` are kept as background by every operation of this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitImage {
    size: ImageSize,
    stride: usize,
    data: Vec<u8>,
}

impl BitImage {
    /// Create a new image filled with background pixels.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `stride` - The number of bytes per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is empty, if the stride is not a multiple of
    /// [`WORD_BYTES`] or if it cannot hold a full row.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitmorph_image::{BitImage, ImageSize};
    ///
    /// let image = BitImage::new(ImageSize { width: 20, height: 5 }, 8).unwrap();
    ///
    /// assert_eq!(image.width(), 20);
    /// assert_eq!(image.height(), 5);
    /// assert_eq!(image.as_slice().len(), 8 * 5);
    /// ```
    pub fn new(size: ImageSize, stride: usize) -> Result<Self, ImageError> {
        validate_layout(size, stride)?;

        Ok(Self {
            size,
            stride,
            data: vec![0u8; stride * size.height],
        })
    }

    /// Create a new background image with the smallest word-aligned stride.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitmorph_image::{BitImage, ImageSize};
    ///
    /// let image = BitImage::from_size_aligned(ImageSize { width: 70, height: 3 }).unwrap();
    /// assert_eq!(image.stride(), 16);
    /// ```
    pub fn from_size_aligned(size: ImageSize) -> Result<Self, ImageError> {
        Self::new(size, aligned_stride(size.width))
    }

    /// Create an image from packed pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `stride` - The number of bytes per row.
    /// * `data` - The packed rows, `stride * height` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or if the length of the data
    /// does not match `stride * height`.
    ///
    /// Bits of `data` past the image width are reset to background.
    pub fn from_raw(size: ImageSize, stride: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        validate_layout(size, stride)?;

        if data.len() != stride * size.height {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                stride * size.height,
            ));
        }

        let mut image = Self { size, stride, data };
        image.clear_padding();
        Ok(image)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the packed pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the packed pixel data mutably.
    ///
    /// Bits past the image width must be left as background, or reset with
    /// [`BitImage::clear_padding`] afterwards.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return the packed pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get the packed bytes of a row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.stride..(y + 1) * self.stride]
    }

    /// Get the packed bytes of a row mutably.
    ///
    /// Bits past the image width must be left as background.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        &mut self.data[y * self.stride..(y + 1) * self.stride]
    }

    /// Iterate over the packed rows of the image.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.stride)
    }

    /// Get the value of a pixel, `None` if the coordinates are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitmorph_image::{BitImage, ImageSize};
    ///
    /// let mut image = BitImage::from_size_aligned([4, 4].into()).unwrap();
    /// image.set(2, 1, true).unwrap();
    ///
    /// assert_eq!(image.get(2, 1), Some(true));
    /// assert_eq!(image.get(1, 2), Some(false));
    /// assert_eq!(image.get(4, 0), None);
    /// ```
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let byte = self.data[y * self.stride + x / 8];
        Some(byte & pixel_mask(x) != 0)
    }

    /// Set the value of a pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let byte = &mut self.data[y * self.stride + x / 8];
        if value {
            *byte |= pixel_mask(x);
        } else {
            *byte &= !pixel_mask(x);
        }

        Ok(())
    }

    /// Count the foreground pixels inside the image width.
    pub fn count_foreground(&self) -> usize {
        let width = self.width();
        let full_bytes = width / 8;
        let tail_mask = tail_mask(width);

        self.rows()
            .map(|row| {
                let full: u32 = row[..full_bytes].iter().map(|b| b.count_ones()).sum();
                let tail = if tail_mask != 0 {
                    (row[full_bytes] & tail_mask).count_ones()
                } else {
                    0
                };
                (full + tail) as usize
            })
            .sum()
    }

    /// Swap foreground and background for every pixel inside the image width.
    pub fn invert(&mut self) {
        for word in self.data.chunks_exact_mut(WORD_BYTES) {
            let value = !u64::from_ne_bytes(word_bytes(word));
            word.copy_from_slice(&value.to_ne_bytes());
        }
        self.clear_padding();
    }

    /// Reset every bit beyond the image width to background.
    pub fn clear_padding(&mut self) {
        let width = self.width();
        for row in self.data.chunks_exact_mut(self.stride) {
            clear_row_padding(row, width);
        }
    }
}

/// Copy a [`WORD_BYTES`] sized chunk into a fixed array.
///
/// # Panics
///
/// Panics if `chunk` is not exactly [`WORD_BYTES`] long.
#[inline]
pub fn word_bytes(chunk: &[u8]) -> [u8; WORD_BYTES] {
    let mut bytes = [0u8; WORD_BYTES];
    bytes.copy_from_slice(chunk);
    bytes
}

/// Number of bytes holding `width` packed pixels.
pub fn min_stride(width: usize) -> usize {
    width.div_ceil(8)
}

/// Smallest stride holding `width` packed pixels that is a multiple of [`WORD_BYTES`].
pub fn aligned_stride(width: usize) -> usize {
    min_stride(width).div_ceil(WORD_BYTES) * WORD_BYTES
}

/// Reset the bits of a packed row at `x >= width` to background.
pub fn clear_row_padding(row: &mut [u8], width: usize) {
    let full_bytes = width / 8;
    let mask = tail_mask(width);

    let padding_start = if mask != 0 {
        row[full_bytes] &= mask;
        full_bytes + 1
    } else {
        full_bytes
    };

    if padding_start < row.len() {
        row[padding_start..].fill(0);
    }
}

fn validate_layout(size: ImageSize, stride: usize) -> Result<(), ImageError> {
    if size.width == 0 || size.height == 0 {
        return Err(ImageError::EmptyImage(size.width, size.height));
    }

    if stride % WORD_BYTES != 0 {
        return Err(ImageError::InvalidStrideAlignment(stride, WORD_BYTES));
    }

    let required = min_stride(size.width);
    if stride < required {
        return Err(ImageError::StrideTooSmall(stride, size.width, required));
    }

    Ok(())
}

// Mask of pixel `x` inside its byte.
#[inline]
fn pixel_mask(x: usize) -> u8 {
    0x80 >> (x % 8)
}

// Mask of the valid pixels in the last partial byte, zero when the width is byte aligned.
#[inline]
fn tail_mask(width: usize) -> u8 {
    match width % 8 {
        0 => 0,
        rem => 0xffu8 << (8 - rem),
    }
}
