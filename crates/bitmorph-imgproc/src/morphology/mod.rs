//! Morphological operations on bit-packed binary images.
//!
//! Erosion runs in place, one row at a time, against a rolling window of
//! pre-shifted source rows held by a [`NeighborhoodCache`].

/// Error types used for morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Sub-byte shifting of packed rows.
pub mod shift;

/// Structuring elements.
pub mod kernel;
pub use kernel::{Connectivity, StructuringElement};

/// Boundary handling for rows without a full neighborhood.
pub mod border;
pub use border::BorderMode;

/// Rolling window of shifted rows.
pub mod cache;
pub use cache::NeighborhoodCache;

/// Erosion with a 3x3 structuring element.
pub mod erosion;
pub use erosion::{erode, erode4, erode8, erode_with_border};

/// Isotropic erosion schedule.
pub mod isotropic;
pub use isotropic::{erode_isotropic, erode_isotropic_with_border, isotropic_schedule};

mod utils;
