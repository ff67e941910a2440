//! # rotconv
//!
//! This crate converts between the four common representations of a 3d rotation
//! and applies rigid transforms (rotation + translation) to 3d points.
//!
//! The representations are:
//!
//! * [`nalgebra::Rotation3`] - a 3×3 orthonormal rotation matrix
//! * [`Rodrigues`] - an axis-angle vector whose direction is the rotation axis
//!   and whose magnitude is the rotation angle in radians
//! * [`nalgebra::UnitQuaternion`] - a unit quaternion
//! * [`EulerAngles`] - three angles plus an explicit [`EulerOrder`] convention tag
//!
//! All pairwise conversions route through the rotation matrix as the canonical
//! intermediate (see [`convert`]). This is a design rule rather than an
//! implementation detail: it gives every conversion a single source of numerical
//! truth, so chaining conversions is transitive within floating-point tolerance.
//!
//! Two numerical degeneracies are inherent to the representations and are not
//! errors:
//!
//! * a quaternion `q` and its negation `-q` encode the same rotation, so
//!   round trips may flip sign;
//! * Euler angles are non-unique at gimbal lock (when the middle rotation
//!   aligns the outer axes), so round trips reproduce the rotation, not
//!   necessarily the angles.
//!
//! Every operation here is a pure, stateless value conversion. Nothing blocks,
//! nothing is retained between calls, and concurrent use is bound only by the
//! ordinary rules on shared `&mut` outputs.

#![no_std]

mod euler;
mod rodrigues;
mod transform;

pub mod convert;

pub use euler::*;
pub use nalgebra;
pub use rodrigues::*;
pub use transform::*;
