use bitmorph_image::word_bytes;

/// Read a chunk as a word whose most significant bit is the leftmost pixel.
#[inline]
pub(crate) fn load_be_word(chunk: &[u8]) -> u64 {
    u64::from_be_bytes(word_bytes(chunk))
}
