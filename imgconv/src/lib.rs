//! # imgconv
//!
//! This crate converts images between the three pixel layout families used in
//! computer vision code, over two pixel depths:
//!
//! * [`Interleaved`] - band values packed per pixel (`RGBRGB…`)
//! * [`Planar`] - one contiguous region per band (all R, then all G, …)
//! * [`Gray`] - a single band
//!
//! with pixels stored as 8-bit unsigned integers or 32-bit floats. The
//! [`ImageBuffer`] enum tags a buffer with its (layout, depth) pair so that
//! heterogeneous code can dispatch on it; the entry points in [`convert`]
//! check that tag and route through a fixed table of typed conversions.
//!
//! Gray reduction comes in two flavors: the unweighted arithmetic mean of all
//! bands, or perceptual luma over the first three bands (assumed R, G, B) with
//! the ITU-R BT.601 coefficients. See [`convert::convert_to_gray`].
//!
//! Images enter the crate either from an externally owned row-major RGB/RGBA
//! byte bitmap ([`BitmapRef`]) or from a raster file on disk via the [`image`]
//! crate ([`load_from_path`]). Both paths funnel into the same conversion
//! table, so errors and semantics are identical.
//!
//! Every conversion is a pure synchronous value operation: it either returns a
//! complete, well-formed buffer or an error, and never leaves partial output
//! behind. The only I/O in the crate is the single file read inside
//! `load_from_path`.

mod bitmap;
mod buffer;
mod error;
mod load;
mod pixel;

pub mod convert;

pub use bitmap::*;
pub use buffer::*;
pub use error::*;
pub use load::*;
pub use pixel::*;
