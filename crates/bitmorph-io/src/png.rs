use std::path::Path;

use bitmorph_image::{min_stride, BitImage, ImageSize};

use crate::error::IoError;

/// Read a 1-bit PNG image as a bit-packed image.
///
/// Foreground pixels are set bits, see [`decode_image_png_mono1`] for the
/// polarity rules.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
///
/// # Returns
///
/// A bit-packed image with a word-aligned stride.
pub fn read_image_png_mono1(file_path: impl AsRef<Path>) -> Result<BitImage, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;
    decode_image_png_mono1(&data)
}

/// Decode a 1-bit PNG image from memory.
///
/// Grayscale images keep their pixel values: white is foreground. Palette
/// images are inverted when the first palette entry is brighter than the
/// second, so the darker entry always ends up as background.
///
/// # Arguments
///
/// * `src` - The encoded PNG data.
///
/// # Errors
///
/// Returns an error if the data is not a valid PNG or if it is not 1 bit per pixel.
pub fn decode_image_png_mono1(src: &[u8]) -> Result<BitImage, IoError> {
    let mut decoder = ::png::Decoder::new(std::io::Cursor::new(src));
    decoder.set_transformations(::png::Transformations::IDENTITY);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    if info.bit_depth != ::png::BitDepth::One {
        return Err(IoError::UnsupportedBitDepth(info.bit_depth as u8));
    }

    let invert = match info.color_type {
        ::png::ColorType::Grayscale => false,
        ::png::ColorType::Indexed => info
            .palette
            .as_deref()
            .is_some_and(first_entry_is_brighter),
        other => return Err(IoError::UnsupportedColorType(format!("{other:?}"))),
    };

    log::debug!("decoding 1-bit png {size}, invert: {invert}");

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let line_size = frame.line_size;

    let mut image = BitImage::from_size_aligned(size)?;
    for (y, src_row) in buf.chunks_exact(line_size).take(size.height).enumerate() {
        image.row_mut(y)[..line_size].copy_from_slice(src_row);
    }

    if invert {
        image.invert();
    } else {
        image.clear_padding();
    }

    Ok(image)
}

/// Write a bit-packed image as a 1-bit grayscale PNG.
///
/// Set bits are written as white. No polarity inversion is applied, so an
/// image decoded from an inverted palette is written back with its
/// normalized polarity.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image to write.
pub fn write_image_png_mono1(
    file_path: impl AsRef<Path>,
    image: &BitImage,
) -> Result<(), IoError> {
    let data = encode_image_png_mono1(image)?;
    std::fs::write(file_path, data)?;
    Ok(())
}

/// Encode a bit-packed image as a 1-bit grayscale PNG in memory.
pub fn encode_image_png_mono1(image: &BitImage) -> Result<Vec<u8>, IoError> {
    let line_size = min_stride(image.width());
    let packed = image
        .rows()
        .flat_map(|row| row[..line_size].iter().copied())
        .collect::<Vec<u8>>();

    let mut out = Vec::new();
    {
        let mut encoder =
            ::png::Encoder::new(&mut out, image.width() as u32, image.height() as u32);
        encoder.set_color(::png::ColorType::Grayscale);
        encoder.set_depth(::png::BitDepth::One);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&packed)?;
        writer.finish()?;
    }

    Ok(out)
}

fn first_entry_is_brighter(palette: &[u8]) -> bool {
    match palette {
        [r0, g0, b0, r1, g1, b1, ..] => intensity(*r0, *g0, *b0) > intensity(*r1, *g1, *b1),
        _ => false,
    }
}

fn intensity(red: u8, green: u8, blue: u8) -> f64 {
    0.299 * red as f64 + 0.587 * green as f64 + 0.114 * blue as f64
}

#[cfg(test)]
mod tests {
    use bitmorph_image::BitImage;

    use super::{decode_image_png_mono1, encode_image_png_mono1, first_entry_is_brighter};
    use crate::error::IoError;

    fn encode_palette(
        width: u32,
        height: u32,
        palette: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, IoError> {
        let mut out = Vec::new();
        {
            let mut encoder = ::png::Encoder::new(&mut out, width, height);
            encoder.set_color(::png::ColorType::Indexed);
            encoder.set_depth(::png::BitDepth::One);
            encoder.set_palette(palette.to_vec());
            let mut writer = encoder.write_header()?;
            writer.write_image_data(data)?;
            writer.finish()?;
        }
        Ok(out)
    }

    #[test]
    fn palette_brightness() {
        assert!(first_entry_is_brighter(&[255, 255, 255, 0, 0, 0]));
        assert!(!first_entry_is_brighter(&[0, 0, 0, 255, 255, 255]));
        // green weighs more than red and blue together
        assert!(first_entry_is_brighter(&[0, 200, 0, 200, 0, 200]));
        assert!(!first_entry_is_brighter(&[255, 255, 255]));
    }

    #[test]
    fn decode_grayscale_keeps_polarity() -> Result<(), IoError> {
        let mut image = BitImage::from_size_aligned([10, 3].into())?;
        image.set(0, 0, true)?;
        image.set(9, 2, true)?;

        let decoded = decode_image_png_mono1(&encode_image_png_mono1(&image)?)?;
        assert_eq!(decoded, image);
        assert_eq!(decoded.stride(), 8);
        Ok(())
    }

    #[test]
    fn decode_bright_first_palette_inverts() -> Result<(), IoError> {
        // white, black: index 1 is the dark ink
        let png = encode_palette(12, 2, &[255, 255, 255, 0, 0, 0], &[0b1000_0000, 0, 0xff, 0xf0])?;
        let image = decode_image_png_mono1(&png)?;

        assert_eq!(image.row(0)[..2], [0b0111_1111u8, 0b1111_0000]);
        assert_eq!(image.row(1)[..2], [0u8, 0]);
        assert_eq!(image.count_foreground(), 11);
        Ok(())
    }

    #[test]
    fn decode_dark_first_palette_keeps_polarity() -> Result<(), IoError> {
        // padding bits set in the source must not leak into the image
        let png = encode_palette(12, 1, &[0, 0, 0, 255, 255, 255], &[0b1000_0000, 0xff])?;
        let image = decode_image_png_mono1(&png)?;

        assert_eq!(image.row(0)[..2], [0b1000_0000u8, 0b1111_0000]);
        assert_eq!(image.count_foreground(), 5);
        Ok(())
    }

    #[test]
    fn decode_rejects_8bit() -> Result<(), IoError> {
        let mut out = Vec::new();
        {
            let mut encoder = ::png::Encoder::new(&mut out, 2, 2);
            encoder.set_color(::png::ColorType::Grayscale);
            encoder.set_depth(::png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&[0, 255, 255, 0])?;
            writer.finish()?;
        }

        assert!(matches!(
            decode_image_png_mono1(&out),
            Err(IoError::UnsupportedBitDepth(8))
        ));
        Ok(())
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode_image_png_mono1(b"not a png"),
            Err(IoError::PngDecodeError(_))
        ));
    }
}
