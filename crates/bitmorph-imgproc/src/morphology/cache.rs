use bitmorph_image::{clear_row_padding, BitImage};

use super::shift::{shift_row, RowShift};

/// Rolling window over three consecutive source rows.
///
/// Holds nine row buffers: for each of the rows above, at and below the row
/// being produced, its left-shifted, unshifted and right-shifted copies. The
/// buffers keep the original pixels even after the image row has been
/// overwritten with eroded output.
///
/// Advancing the window recycles the storage of the row that leaves it, so
/// each source row is copied and shifted exactly once per erosion.
pub struct NeighborhoodCache {
    // three groups of left, center and right shifted copies
    buffers: [[Vec<u8>; 3]; 3],
    // buffer group holding each window row: above, center, below
    slots: [usize; 3],
}

impl NeighborhoodCache {
    /// Create a cache for rows of `stride` bytes, filled with background.
    pub fn new(stride: usize) -> Self {
        Self {
            buffers: std::array::from_fn(|_| std::array::from_fn(|_| vec![0u8; stride])),
            slots: [0, 1, 2],
        }
    }

    /// Fill the window with the rows around `center_row`.
    ///
    /// Rows outside the image are cached as background.
    ///
    /// # Arguments
    ///
    /// * `image` - The source image.
    /// * `center_row` - The row the next output is produced for.
    pub fn init(&mut self, image: &BitImage, center_row: usize) {
        self.slots = [0, 1, 2];
        let window = [
            center_row.checked_sub(1),
            Some(center_row),
            Some(center_row + 1),
        ];
        for (local_row, src_row) in window.into_iter().enumerate() {
            self.load(local_row, image, src_row);
        }
    }

    /// Slide the window one row down, exposing `new_bottom_row`.
    ///
    /// The new row must still hold its original pixels, so it has to be read
    /// before the erosion writes it. Rows past the bottom of the image are
    /// cached as background.
    pub fn advance(&mut self, image: &BitImage, new_bottom_row: usize) {
        self.slots.rotate_left(1);
        self.load(2, image, Some(new_bottom_row));
    }

    /// The cached copy of a window row.
    ///
    /// # Arguments
    ///
    /// * `local_row` - 0, 1 or 2 for the row above, at or below the output row.
    /// * `shift` - The horizontal variant.
    pub fn buffer(&self, local_row: usize, shift: RowShift) -> &[u8] {
        self.buffer_at(local_row, shift.index())
    }

    /// The cached copy at a structuring element position `(row, col)`.
    pub(crate) fn buffer_at(&self, local_row: usize, col: usize) -> &[u8] {
        &self.buffers[self.slots[local_row]][col]
    }

    // Rows past the image are cached as background. Padding bits of the
    // source are dropped so they cannot shift into the last pixel.
    fn load(&mut self, local_row: usize, image: &BitImage, src_row: Option<usize>) {
        let [left, center, right] = &mut self.buffers[self.slots[local_row]];

        match src_row.filter(|&y| y < image.height()) {
            Some(y) => {
                center.copy_from_slice(image.row(y));
                clear_row_padding(center, image.width());
                shift_row(center, left, RowShift::Left);
                shift_row(center, right, RowShift::Right);
            }
            None => {
                left.fill(0);
                center.fill(0);
                right.fill(0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bitmorph_image::{BitImage, ImageError};

    use super::NeighborhoodCache;
    use crate::morphology::shift::{shift_left, shift_right, RowShift};

    fn numbered_image(height: usize) -> Result<BitImage, ImageError> {
        let mut image = BitImage::from_size_aligned([64, height].into())?;
        for y in 0..height {
            for (i, byte) in image.row_mut(y).iter_mut().enumerate() {
                *byte = (y as u8).wrapping_mul(16).wrapping_add(i as u8 * 3 + 1);
            }
        }
        Ok(image)
    }

    fn assert_window_row(cache: &NeighborhoodCache, local_row: usize, expected: &[u8]) {
        let mut left = vec![0u8; expected.len()];
        let mut right = vec![0u8; expected.len()];
        shift_left(expected, &mut left);
        shift_right(expected, &mut right);

        assert_eq!(cache.buffer(local_row, RowShift::Center), expected);
        assert_eq!(cache.buffer(local_row, RowShift::Left), left.as_slice());
        assert_eq!(cache.buffer(local_row, RowShift::Right), right.as_slice());
    }

    #[test]
    fn init_loads_three_rows() -> Result<(), ImageError> {
        let image = numbered_image(5)?;
        let mut cache = NeighborhoodCache::new(image.stride());
        cache.init(&image, 1);

        for local_row in 0..3 {
            assert_window_row(&cache, local_row, image.row(local_row));
        }
        Ok(())
    }

    #[test]
    fn init_outside_image_is_background() -> Result<(), ImageError> {
        let image = numbered_image(1)?;
        let mut cache = NeighborhoodCache::new(image.stride());
        cache.init(&image, 0);

        let zeros = vec![0u8; image.stride()];
        assert_window_row(&cache, 0, &zeros);
        assert_window_row(&cache, 1, image.row(0));
        assert_window_row(&cache, 2, &zeros);
        Ok(())
    }

    #[test]
    fn load_drops_padding_bits() -> Result<(), ImageError> {
        let mut image = BitImage::from_size_aligned([12, 3].into())?;
        image.row_mut(1).fill(0xff);
        let mut cache = NeighborhoodCache::new(image.stride());
        cache.init(&image, 1);

        assert_eq!(cache.buffer(1, RowShift::Center)[..2], [0xffu8, 0b1111_0000]);
        assert_eq!(cache.buffer(1, RowShift::Left)[..2], [0xffu8, 0b1110_0000]);
        assert_eq!(cache.buffer(1, RowShift::Right)[..2], [0x7fu8, 0b1111_1000]);
        assert!(cache.buffer(1, RowShift::Left)[2..].iter().all(|&b| b == 0));
        Ok(())
    }

    #[test]
    fn advance_keeps_original_rows() -> Result<(), ImageError> {
        let mut image = numbered_image(6)?;
        let original = image.clone();
        let mut cache = NeighborhoodCache::new(image.stride());
        cache.init(&image, 1);

        for center in 1..4 {
            // overwrite the row as the erosion would, then slide the window
            image.row_mut(center).fill(0);
            cache.advance(&image, center + 2);

            for local_row in 0..3 {
                assert_window_row(&cache, local_row, original.row(center + local_row));
            }
        }

        cache.advance(&image, 6);
        assert_window_row(&cache, 2, &vec![0u8; image.stride()]);
        Ok(())
    }
}
