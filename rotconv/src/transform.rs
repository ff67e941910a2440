use crate::{EulerAngles, Rodrigues};
use derive_more::{AsMut, AsRef, From, Into};
use nalgebra::{IsometryMatrix3, Point3, Rotation3, UnitQuaternion, Vector3};
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A rigid transform: a rotation followed by a translation.
///
/// Applied to a point as `p' = R·p + t`. The rotation is stored in matrix form
/// regardless of which representation it was built from, so application never
/// pays for a representation conversion.
///
/// Application has no failure modes. Non-finite coordinates propagate through
/// the arithmetic as ordinary IEEE values; nothing validates them.
#[derive(Debug, Clone, Copy, PartialEq, AsMut, AsRef, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RigidTransform(pub IsometryMatrix3<f64>);

impl RigidTransform {
    /// The transform that maps every point to itself.
    pub fn identity() -> Self {
        Self(IsometryMatrix3::identity())
    }

    /// Creates the transform from a translation and a rotation matrix.
    pub fn from_parts(translation: Vector3<f64>, rotation: Rotation3<f64>) -> Self {
        Self(IsometryMatrix3::from_parts(translation.into(), rotation))
    }

    /// Creates the transform from a translation and a Rodrigues rotation.
    pub fn from_rodrigues(translation: Vector3<f64>, rodrigues: Rodrigues) -> Self {
        Self::from_parts(translation, rodrigues.rotation())
    }

    /// Creates the transform from a translation and a unit quaternion.
    pub fn from_quaternion(translation: Vector3<f64>, quaternion: &UnitQuaternion<f64>) -> Self {
        Self::from_parts(translation, quaternion.to_rotation_matrix())
    }

    /// Creates the transform from a translation and Euler angles.
    pub fn from_euler(translation: Vector3<f64>, euler: &EulerAngles) -> Self {
        Self::from_parts(translation, euler.rotation())
    }

    /// Retrieve the isometry.
    #[inline(always)]
    pub fn isometry(self) -> IsometryMatrix3<f64> {
        self.into()
    }

    /// The rotation component.
    #[inline(always)]
    pub fn rotation(self) -> Rotation3<f64> {
        self.0.rotation
    }

    /// The translation component.
    #[inline(always)]
    pub fn translation(self) -> Vector3<f64> {
        self.0.translation.vector
    }

    /// Takes the inverse of the transform.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self(self.0.inverse())
    }

    /// Applies the transform to a point, returning the new point.
    #[inline(always)]
    pub fn transform(self, point: Point3<f64>) -> Point3<f64> {
        self.0 * point
    }

    /// Applies the transform to a point, writing the result over `out`.
    #[inline(always)]
    pub fn transform_into(self, point: &Point3<f64>, out: &mut Point3<f64>) {
        *out = self.0 * point;
    }

    /// Applies the transform to a point in place.
    #[inline(always)]
    pub fn transform_in_place(self, point: &mut Point3<f64>) {
        *point = self.0 * *point;
    }
}
