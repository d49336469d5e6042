use bitmorph_image::WORD_BYTES;

use super::utils::load_be_word;

/// The three horizontal variants of a cached row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShift {
    /// Pixel `x` holds source pixel `x + 1`.
    Left,
    /// Exact copy of the source row.
    Center,
    /// Pixel `x` holds source pixel `x - 1`.
    Right,
}

impl RowShift {
    /// All variants in cache order.
    pub const ALL: [RowShift; 3] = [RowShift::Left, RowShift::Center, RowShift::Right];

    /// Index of the variant inside a cached row group.
    pub fn index(self) -> usize {
        match self {
            RowShift::Left => 0,
            RowShift::Center => 1,
            RowShift::Right => 2,
        }
    }
}

/// Shift a packed row one pixel to the left.
///
/// Pixel `i` of `dst` becomes pixel `i + 1` of `src`. The pixel entering at
/// the right end of the row is background.
///
/// The row is processed in 64-bit words read in big-endian order, so the
/// result does not depend on the byte order of the host. Bytes past the last
/// whole word are shifted one at a time.
///
/// # Arguments
///
/// * `src` - The packed source row.
/// * `dst` - The packed output row, same length as `src`.
///
/// # Examples
///
/// ```
/// use bitmorph_imgproc::morphology::shift::shift_left;
///
/// let src = [0b0000_0001u8, 0b1000_0000];
/// let mut dst = [0u8; 2];
/// shift_left(&src, &mut dst);
/// assert_eq!(dst, [0b0000_0011, 0b0000_0000]);
/// ```
pub fn shift_left(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());

    let word_end = src.len() - src.len() % WORD_BYTES;

    for (i, (dst_word, src_word)) in dst[..word_end]
        .chunks_exact_mut(WORD_BYTES)
        .zip(src[..word_end].chunks_exact(WORD_BYTES))
        .enumerate()
    {
        // the first pixel of the next byte moves into the last bit of this word
        let carry = src
            .get((i + 1) * WORD_BYTES)
            .map_or(0, |&next| u64::from(next >> 7));
        let shifted = (load_be_word(src_word) << 1) | carry;
        dst_word.copy_from_slice(&shifted.to_be_bytes());
    }

    for j in word_end..src.len() {
        let carry = src.get(j + 1).map_or(0, |&next| next >> 7);
        dst[j] = (src[j] << 1) | carry;
    }
}

/// Shift a packed row one pixel to the right.
///
/// Pixel `i` of `dst` becomes pixel `i - 1` of `src`. The pixel entering at
/// the left end of the row is background.
///
/// # Arguments
///
/// * `src` - The packed source row.
/// * `dst` - The packed output row, same length as `src`.
///
/// # Examples
///
/// ```
/// use bitmorph_imgproc::morphology::shift::shift_right;
///
/// let src = [0b1000_0001u8, 0b0000_0000];
/// let mut dst = [0u8; 2];
/// shift_right(&src, &mut dst);
/// assert_eq!(dst, [0b0100_0000, 0b1000_0000]);
/// ```
pub fn shift_right(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());

    let word_end = src.len() - src.len() % WORD_BYTES;

    for (i, (dst_word, src_word)) in dst[..word_end]
        .chunks_exact_mut(WORD_BYTES)
        .zip(src[..word_end].chunks_exact(WORD_BYTES))
        .enumerate()
    {
        // the last pixel of the previous byte moves into the first bit of this word
        let carry = match i {
            0 => 0,
            _ => u64::from(src[i * WORD_BYTES - 1] & 1) << 63,
        };
        let shifted = (load_be_word(src_word) >> 1) | carry;
        dst_word.copy_from_slice(&shifted.to_be_bytes());
    }

    for j in word_end..src.len() {
        let carry = match j {
            0 => 0,
            _ => (src[j - 1] & 1) << 7,
        };
        dst[j] = (src[j] >> 1) | carry;
    }
}

/// Write the shifted variant of `src` selected by `shift` into `dst`.
pub fn shift_row(src: &[u8], dst: &mut [u8], shift: RowShift) {
    match shift {
        RowShift::Left => shift_left(src, dst),
        RowShift::Center => dst.copy_from_slice(src),
        RowShift::Right => shift_right(src, dst),
    }
}

#[cfg(test)]
mod tests {
    use super::{shift_left, shift_right, shift_row, RowShift};

    fn pixels(row: &[u8]) -> Vec<bool> {
        row.iter()
            .flat_map(|b| (0..8).map(move |k| b & (0x80 >> k) != 0))
            .collect()
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| (i as u8).wrapping_mul(37).wrapping_add(0x5b))
            .collect()
    }

    #[test]
    fn shift_left_crosses_word_boundary() {
        let mut src = [0u8; 16];
        src[8] = 0b1000_0000;
        src[0] = 0b1000_0000;
        let mut dst = [0u8; 16];
        shift_left(&src, &mut dst);

        let mut expected = [0u8; 16];
        expected[7] = 0b0000_0001;
        assert_eq!(dst, expected);
    }

    #[test]
    fn shift_right_crosses_word_boundary() {
        let mut src = [0u8; 16];
        src[7] = 0b0000_0001;
        src[15] = 0b0000_0001;
        let mut dst = [0u8; 16];
        shift_right(&src, &mut dst);

        let mut expected = [0u8; 16];
        expected[8] = 0b1000_0000;
        assert_eq!(dst, expected);
    }

    #[test]
    fn shift_matches_pixel_definition() {
        // 8-byte word path and byte tail path in the same row
        for len in [1usize, 3, 8, 11, 16, 24, 29] {
            let src = pattern(len);
            let src_pixels = pixels(&src);
            let n = src_pixels.len();

            let mut left = vec![0u8; len];
            shift_left(&src, &mut left);
            let expected: Vec<bool> = (0..n)
                .map(|i| i + 1 < n && src_pixels[i + 1])
                .collect();
            assert_eq!(pixels(&left), expected, "left shift, {len} bytes");

            let mut right = vec![0u8; len];
            shift_right(&src, &mut right);
            let expected: Vec<bool> = (0..n).map(|i| i > 0 && src_pixels[i - 1]).collect();
            assert_eq!(pixels(&right), expected, "right shift, {len} bytes");
        }
    }

    #[test]
    fn shift_round_trip_loses_boundary_pixel() {
        let src = [0xffu8; 16];

        let mut left = [0u8; 16];
        let mut back = [0u8; 16];
        shift_left(&src, &mut left);
        shift_right(&left, &mut back);
        let mut expected = [0xffu8; 16];
        expected[0] = 0b0111_1111;
        assert_eq!(back, expected);

        let mut right = [0u8; 16];
        shift_right(&src, &mut right);
        shift_left(&right, &mut back);
        let mut expected = [0xffu8; 16];
        expected[15] = 0b1111_1110;
        assert_eq!(back, expected);
    }

    #[test]
    fn shift_round_trip_keeps_interior() {
        let mut src = pattern(24);
        src[0] &= 0b0111_1111;
        src[23] &= 0b1111_1110;

        let mut tmp = vec![0u8; 24];
        let mut back = vec![0u8; 24];
        shift_left(&src, &mut tmp);
        shift_right(&tmp, &mut back);
        assert_eq!(back, src);

        shift_right(&src, &mut tmp);
        shift_left(&tmp, &mut back);
        assert_eq!(back, src);
    }

    #[test]
    fn shift_row_center_copies() {
        let src = pattern(8);
        let mut dst = vec![0u8; 8];
        shift_row(&src, &mut dst, RowShift::Center);
        assert_eq!(dst, src);
        assert_eq!(RowShift::ALL.map(RowShift::index), [0, 1, 2]);
    }
}
