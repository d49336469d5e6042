use super::MorphologyError;

/// Neighborhood connectivity of a 3x3 structuring element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// The four edge-adjacent neighbors plus the center.
    Four,
    /// All eight neighbors plus the center.
    Eight,
}

impl Connectivity {
    /// Number of neighbors around the center.
    pub fn neighbors(self) -> usize {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-connected", self.neighbors())
    }
}

/// A 3x3 binary structuring element.
///
/// The mask is row-major with index `r * 3 + c`. Row `r` selects the source
/// row `y - 1 + r`. Column `c` selects the left-shifted, unshifted or
/// right-shifted copy of that row, in that order; the left-shifted copy holds
/// pixel `x + 1` at position `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuringElement {
    mask: [bool; 9],
}

impl StructuringElement {
    /// Side length of the element.
    pub const SIZE: usize = 3;

    /// The 8-neighbor element, all nine positions active.
    pub fn box3() -> Self {
        Self { mask: [true; 9] }
    }

    /// The 4-neighbor element: up, left, right, down and the center.
    pub fn cross3() -> Self {
        let mut mask = [false; 9];
        for (i, m) in mask.iter_mut().enumerate() {
            *m = i % 2 == 1 || i == 4;
        }
        Self { mask }
    }

    /// Create an element from a row-major mask.
    ///
    /// # Errors
    ///
    /// Returns an error if no position is active.
    pub fn from_mask(mask: [bool; 9]) -> Result<Self, MorphologyError> {
        if mask.iter().all(|&m| !m) {
            return Err(MorphologyError::AllKernelElementsInactive);
        }
        Ok(Self { mask })
    }

    /// Create an element from a nested 3x3 kernel.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitmorph_imgproc::morphology::StructuringElement;
    ///
    /// let kernel = vec![
    ///     vec![false, true, false],
    ///     vec![true, true, true],
    ///     vec![false, true, false],
    /// ];
    /// let element = StructuringElement::from_rows(&kernel).unwrap();
    /// assert_eq!(element, StructuringElement::cross3());
    /// ```
    pub fn from_rows(kernel: &[Vec<bool>]) -> Result<Self, MorphologyError> {
        if kernel.is_empty() || kernel[0].is_empty() {
            return Err(MorphologyError::EmptyKernel);
        }

        let row_len = kernel[0].len();
        if !kernel.iter().all(|row| row.len() == row_len) {
            return Err(MorphologyError::NonRectangularKernel);
        }

        if kernel.len() != Self::SIZE || row_len != Self::SIZE {
            return Err(MorphologyError::UnsupportedKernelSize(kernel.len(), row_len));
        }

        let mut mask = [false; 9];
        for (r, row) in kernel.iter().enumerate() {
            for (c, &active) in row.iter().enumerate() {
                mask[r * Self::SIZE + c] = active;
            }
        }

        Self::from_mask(mask)
    }

    /// The row-major mask.
    pub fn mask(&self) -> &[bool; 9] {
        &self.mask
    }

    /// Whether the position at `(row, col)` is active.
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        row < Self::SIZE && col < Self::SIZE && self.mask[row * Self::SIZE + col]
    }

    /// Number of active positions.
    pub fn num_active(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Active positions as `(row, col)` pairs in row-major order.
    pub fn offsets(&self) -> Vec<(usize, usize)> {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| (i / Self::SIZE, i % Self::SIZE))
            .collect()
    }
}

impl From<Connectivity> for StructuringElement {
    fn from(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Four => Self::cross3(),
            Connectivity::Eight => Self::box3(),
        }
    }
}
