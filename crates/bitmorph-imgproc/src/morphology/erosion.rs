use bitmorph_image::{clear_row_padding, word_bytes, BitImage, WORD_BYTES};

use super::cache::NeighborhoodCache;
use super::{BorderMode, StructuringElement};

/// Erode a binary image in place with a 3x3 structuring element.
///
/// The first and last rows are left unchanged, see [`BorderMode::LeaveUnchanged`].
///
/// # Arguments
///
/// * `image` - The image to erode.
/// * `element` - The structuring element.
///
/// # Examples
///
/// ```
/// use bitmorph_image::BitImage;
/// use bitmorph_imgproc::morphology::{erode, StructuringElement};
///
/// let mut image = BitImage::from_size_aligned([5, 5].into()).unwrap();
/// for y in 0..5 {
///     for x in 0..5 {
///         image.set(x, y, true).unwrap();
///     }
/// }
///
/// erode(&mut image, &StructuringElement::cross3());
///
/// assert_eq!(image.get(0, 2), Some(false));
/// assert_eq!(image.get(2, 2), Some(true));
/// assert_eq!(image.get(0, 0), Some(true));
/// ```
pub fn erode(image: &mut BitImage, element: &StructuringElement) {
    erode_with_border(image, element, BorderMode::default());
}

/// Erode with the 8-neighbor (box) element.
pub fn erode8(image: &mut BitImage) {
    erode(image, &StructuringElement::box3());
}

/// Erode with the 4-neighbor (cross) element.
pub fn erode4(image: &mut BitImage) {
    erode(image, &StructuringElement::cross3());
}

/// Erode a binary image in place with a 3x3 structuring element and a border mode.
///
/// Each output row is the bitwise AND of the cached source rows selected by
/// the active positions of `element`. Pixels outside the row are background
/// and the padding bits past the image width stay background.
///
/// # Arguments
///
/// * `image` - The image to erode.
/// * `element` - The structuring element.
/// * `border` - How rows without a full neighborhood are handled.
pub fn erode_with_border(image: &mut BitImage, element: &StructuringElement, border: BorderMode) {
    let rows = border.output_rows(image.height());
    if rows.is_empty() {
        log::trace!(
            "erosion skipped, no output rows for height {} with {:?}",
            image.height(),
            border
        );
        return;
    }

    let offsets = element.offsets();
    let Some((first, rest)) = offsets.split_first() else {
        return;
    };

    let width = image.width();
    let mut cache = NeighborhoodCache::new(image.stride());
    cache.init(image, rows.start);

    for y in rows.clone() {
        let out = image.row_mut(y);
        debug_assert_eq!(out.len() % WORD_BYTES, 0);

        // the AND is independent of the byte order, so native words are fine here
        for (i, out_word) in out.chunks_exact_mut(WORD_BYTES).enumerate() {
            let start = i * WORD_BYTES;
            let word = |(r, c): (usize, usize)| {
                u64::from_ne_bytes(word_bytes(&cache.buffer_at(r, c)[start..start + WORD_BYTES]))
            };
            let acc = rest.iter().fold(word(*first), |acc, &pos| acc & word(pos));
            out_word.copy_from_slice(&acc.to_ne_bytes());
        }

        clear_row_padding(out, width);

        if y + 1 < rows.end {
            cache.advance(image, y + 2);
        }
    }
}
