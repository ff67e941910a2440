//! # `visconv`
//!
//! Batteries-included conversions between vision image representations and 3d
//! rotation representations.
//!
//! This crate exists for discoverability and quick scripts: it re-exports the
//! member crates in one place. If you are building a production application,
//! depend on the member crates directly so you only pull in what you use, or
//! disable default features here and enable the ones you want.
//!
//! ## Modules
//! * [`image`] - conversions between interleaved, planar and gray buffers,
//!   external bitmap ingestion and image file loading
//! * [`geom`] - conversions between rotation matrix, Rodrigues, quaternion and
//!   Euler representations, and rigid transform application

/// Image buffer layout, depth and gray conversions
pub mod image {
    #[cfg(feature = "imgconv")]
    pub use imgconv::*;
}

/// Rotation representation conversions and rigid transforms
pub mod geom {
    #[cfg(feature = "rotconv")]
    pub use rotconv::*;
}
