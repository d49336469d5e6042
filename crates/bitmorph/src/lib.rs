#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use bitmorph_image as image;

#[doc(inline)]
pub use bitmorph_imgproc as imgproc;

#[doc(inline)]
pub use bitmorph_io as io;
