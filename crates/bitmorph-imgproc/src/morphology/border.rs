use std::ops::Range;

/// Border handling modes for rows without a full 3x3 neighborhood.
///
/// Columns outside the image are always treated as background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderMode {
    /// Leave the first and last rows exactly as in the input.
    ///
    /// Images with fewer than three rows are left untouched.
    #[default]
    LeaveUnchanged,

    /// Treat the rows above the first row and below the last row as background,
    /// eroding every row.
    Background,
}

impl BorderMode {
    /// Rows written by an erosion of an image with `height` rows.
    ///
    /// The range is empty when there is nothing to erode.
    pub fn output_rows(self, height: usize) -> Range<usize> {
        match self {
            BorderMode::LeaveUnchanged if height < 3 => 0..0,
            BorderMode::LeaveUnchanged => 1..height - 1,
            BorderMode::Background => 0..height,
        }
    }
}
