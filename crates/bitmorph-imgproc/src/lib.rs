#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// binary morphology module.
pub mod morphology;
