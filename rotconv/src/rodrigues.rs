use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use num_traits::Float;
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A rotation in Rodrigues (axis-angle) form.
///
/// The direction of the vector is the rotation axis and its magnitude is the
/// rotation angle in radians. The zero vector is the identity rotation, which
/// has no defined axis.
///
/// This is the compact three-parameter encoding of a rotation, so it carries
/// none of the redundancy of a matrix or quaternion. The conversions to and
/// from [`Rotation3`] are the exponential and logarithm maps of the rotation
/// group.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Rodrigues(pub Vector3<f64>);

impl Rodrigues {
    /// Creates a Rodrigues vector from a unit axis and an angle in radians.
    pub fn from_axis_angle(axis: &Unit<Vector3<f64>>, angle: f64) -> Self {
        Self(axis.into_inner() * angle)
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self(Vector3::zeros())
    }

    /// The rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.0.norm()
    }

    /// The rotation axis, or `None` for rotations too close to the identity
    /// to have a meaningful axis.
    pub fn axis(&self) -> Option<Unit<Vector3<f64>>> {
        Unit::try_new(self.0, f64::epsilon())
    }

    /// Converts to a rotation matrix.
    pub fn rotation(self) -> Rotation3<f64> {
        self.into()
    }
}

/// The exponential map.
impl From<Rodrigues> for Rotation3<f64> {
    fn from(r: Rodrigues) -> Self {
        // Guard the degenerate case where the angle is near zero and the axis
        // direction becomes meaningless.
        let angle2 = r.0.norm_squared();
        if angle2 <= f64::epsilon() {
            Rotation3::from_matrix(&(Matrix3::identity() + r.0.cross_matrix()))
        } else {
            let angle = angle2.sqrt();
            let axis = Unit::new_unchecked(r.0 / angle);
            Self::from_axis_angle(&axis, angle)
        }
    }
}

/// The log map.
impl From<Rotation3<f64>> for Rodrigues {
    fn from(rotation: Rotation3<f64>) -> Self {
        let scaled = rotation.scaled_axis();
        // nalgebra can emit NaN for rotations vanishingly close to identity.
        let scaled = if scaled.iter().any(|n| n.is_nan()) {
            Vector3::zeros()
        } else {
            scaled
        };
        Self(scaled)
    }
}
