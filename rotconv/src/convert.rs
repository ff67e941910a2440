//! Directional conversions between rotation representations.
//!
//! Conversions that neither start nor end at the matrix go through
//! [`Rotation3`] as the canonical intermediate rather than a direct closed
//! form. The matrix is the single source of numerical truth here: any chain
//! `X→Y→Z` lands on the same value as `X→Z` (within floating-point tolerance)
//! because both pass through it.
//!
//! Every conversion comes in two forms: an allocating form returning the new
//! value and a `*_into` form writing over a caller-owned output, for hot loops
//! that recycle their outputs. The Euler `*_into` forms take the axis sequence
//! from `out.order`; the allocating forms take it as an argument, since Euler
//! angles are meaningless without one.

use crate::{EulerAngles, EulerOrder, Rodrigues};
use nalgebra::{Rotation3, UnitQuaternion};

/// Converts a rotation matrix to a Rodrigues vector (the log map).
pub fn matrix_to_rodrigues(rotation: &Rotation3<f64>) -> Rodrigues {
    (*rotation).into()
}

pub fn matrix_to_rodrigues_into(rotation: &Rotation3<f64>, out: &mut Rodrigues) {
    *out = matrix_to_rodrigues(rotation);
}

/// Converts a rotation matrix to a unit quaternion.
///
/// The sign of the result is whatever nalgebra produces; `q` and `-q` encode
/// the same rotation.
pub fn matrix_to_quaternion(rotation: &Rotation3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::from_rotation_matrix(rotation)
}

pub fn matrix_to_quaternion_into(rotation: &Rotation3<f64>, out: &mut UnitQuaternion<f64>) {
    *out = matrix_to_quaternion(rotation);
}

/// Decomposes a rotation matrix into Euler angles over the given sequence.
pub fn matrix_to_euler(rotation: &Rotation3<f64>, order: EulerOrder) -> EulerAngles {
    EulerAngles::from_rotation(rotation, order)
}

pub fn matrix_to_euler_into(rotation: &Rotation3<f64>, out: &mut EulerAngles) {
    *out = matrix_to_euler(rotation, out.order);
}

/// Converts a Rodrigues vector to a rotation matrix (the exponential map).
pub fn rodrigues_to_matrix(rodrigues: &Rodrigues) -> Rotation3<f64> {
    (*rodrigues).into()
}

pub fn rodrigues_to_matrix_into(rodrigues: &Rodrigues, out: &mut Rotation3<f64>) {
    *out = rodrigues_to_matrix(rodrigues);
}

/// Converts a Rodrigues vector to a unit quaternion, via the matrix.
pub fn rodrigues_to_quaternion(rodrigues: &Rodrigues) -> UnitQuaternion<f64> {
    matrix_to_quaternion(&rodrigues_to_matrix(rodrigues))
}

pub fn rodrigues_to_quaternion_into(rodrigues: &Rodrigues, out: &mut UnitQuaternion<f64>) {
    *out = rodrigues_to_quaternion(rodrigues);
}

/// Converts a Rodrigues vector to Euler angles, via the matrix.
pub fn rodrigues_to_euler(rodrigues: &Rodrigues, order: EulerOrder) -> EulerAngles {
    matrix_to_euler(&rodrigues_to_matrix(rodrigues), order)
}

pub fn rodrigues_to_euler_into(rodrigues: &Rodrigues, out: &mut EulerAngles) {
    *out = rodrigues_to_euler(rodrigues, out.order);
}

/// Converts a unit quaternion to a rotation matrix.
pub fn quaternion_to_matrix(quaternion: &UnitQuaternion<f64>) -> Rotation3<f64> {
    quaternion.to_rotation_matrix()
}

pub fn quaternion_to_matrix_into(quaternion: &UnitQuaternion<f64>, out: &mut Rotation3<f64>) {
    *out = quaternion_to_matrix(quaternion);
}

/// Converts a unit quaternion to a Rodrigues vector, via the matrix.
pub fn quaternion_to_rodrigues(quaternion: &UnitQuaternion<f64>) -> Rodrigues {
    matrix_to_rodrigues(&quaternion_to_matrix(quaternion))
}

pub fn quaternion_to_rodrigues_into(quaternion: &UnitQuaternion<f64>, out: &mut Rodrigues) {
    *out = quaternion_to_rodrigues(quaternion);
}

/// Converts a unit quaternion to Euler angles, via the matrix.
pub fn quaternion_to_euler(quaternion: &UnitQuaternion<f64>, order: EulerOrder) -> EulerAngles {
    matrix_to_euler(&quaternion_to_matrix(quaternion), order)
}

pub fn quaternion_to_euler_into(quaternion: &UnitQuaternion<f64>, out: &mut EulerAngles) {
    *out = quaternion_to_euler(quaternion, out.order);
}

/// Composes Euler angles into a rotation matrix.
pub fn euler_to_matrix(euler: &EulerAngles) -> Rotation3<f64> {
    euler.rotation()
}

pub fn euler_to_matrix_into(euler: &EulerAngles, out: &mut Rotation3<f64>) {
    *out = euler_to_matrix(euler);
}

/// Converts Euler angles to a Rodrigues vector, via the matrix.
pub fn euler_to_rodrigues(euler: &EulerAngles) -> Rodrigues {
    matrix_to_rodrigues(&euler_to_matrix(euler))
}

pub fn euler_to_rodrigues_into(euler: &EulerAngles, out: &mut Rodrigues) {
    *out = euler_to_rodrigues(euler);
}

/// Converts Euler angles to a unit quaternion, via the matrix.
pub fn euler_to_quaternion(euler: &EulerAngles) -> UnitQuaternion<f64> {
    matrix_to_quaternion(&euler_to_matrix(euler))
}

pub fn euler_to_quaternion_into(euler: &EulerAngles, out: &mut UnitQuaternion<f64>) {
    *out = euler_to_quaternion(euler);
}
