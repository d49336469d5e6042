/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    /// The provided kernel has no rows or no columns.
    #[error("The kernel is empty")]
    EmptyKernel,

    /// The kernel rows have inconsistent lengths.
    #[error("The kernel rows have inconsistent lengths")]
    NonRectangularKernel,

    /// Only 3x3 kernels are supported.
    #[error("Unsupported kernel size {0}x{1}, expected 3x3")]
    UnsupportedKernelSize(usize, usize),

    /// All elements in the kernel are inactive (false).
    #[error("All kernel elements are inactive")]
    AllKernelElementsInactive,
}
