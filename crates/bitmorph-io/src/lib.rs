#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// 1-bit PNG image encoding and decoding.
pub mod png;

pub use crate::error::IoError;
