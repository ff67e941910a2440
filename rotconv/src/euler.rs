use nalgebra::{Rotation3, Vector3};
use num_traits::Float;
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Threshold past which the middle angle is considered to be at gimbal lock
/// and the outer angles are no longer independently recoverable.
const GIMBAL_THRESHOLD: f64 = 1.0 - 1e-9;

/// The twelve elemental rotation sequences an Euler decomposition can use.
///
/// The first six are Tait-Bryan sequences (three distinct axes) and the last
/// six are proper Euler sequences (first and third axis repeated). There is no
/// default: three angles are meaningless until a caller names the sequence.
///
/// Angles are applied about the **fixed world axes** in tag order, so `Xyz`
/// rotates about x first, then y, then z: `R = Rz(θ2)·Ry(θ1)·Rx(θ0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
    Xyx,
    Xzx,
    Yxy,
    Yzy,
    Zxz,
    Zyz,
}

impl EulerOrder {
    /// The axis index (x = 0, y = 1, z = 2) of each rotation in application order.
    pub const fn axes(self) -> (usize, usize, usize) {
        match self {
            Self::Xyz => (0, 1, 2),
            Self::Xzy => (0, 2, 1),
            Self::Yxz => (1, 0, 2),
            Self::Yzx => (1, 2, 0),
            Self::Zxy => (2, 0, 1),
            Self::Zyx => (2, 1, 0),
            Self::Xyx => (0, 1, 0),
            Self::Xzx => (0, 2, 0),
            Self::Yxy => (1, 0, 1),
            Self::Yzy => (1, 2, 1),
            Self::Zxz => (2, 0, 2),
            Self::Zyz => (2, 1, 2),
        }
    }

    /// Whether this is a Tait-Bryan sequence (all three axes distinct).
    pub const fn is_tait_bryan(self) -> bool {
        let (first, _, third) = self.axes();
        first != third
    }
}

/// A rotation as three angles about a named sequence of axes.
///
/// The sequence tag travels with the angles, so a value is never ambiguous
/// about its own convention. Angles are in radians and applied about the fixed
/// world axes in tag order (see [`EulerOrder`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EulerAngles {
    /// The axis sequence the angles decompose over.
    pub order: EulerOrder,
    /// The rotation angles in radians, in application order.
    pub angles: [f64; 3],
}

impl EulerAngles {
    pub fn new(order: EulerOrder, angles: [f64; 3]) -> Self {
        Self { order, angles }
    }

    /// Composes the three elemental rotations into a rotation matrix.
    pub fn rotation(&self) -> Rotation3<f64> {
        let (first, second, third) = self.order.axes();
        axis_rotation(third, self.angles[2])
            * axis_rotation(second, self.angles[1])
            * axis_rotation(first, self.angles[0])
    }

    /// Decomposes a rotation matrix into angles over the given sequence.
    ///
    /// At gimbal lock only a combination of the two outer angles is determined
    /// by the matrix. This decomposition pins the first angle to zero there and
    /// recovers the remaining angle from what is left after stripping the
    /// middle rotation, so [`EulerAngles::rotation`] on the result always
    /// reproduces the input matrix even though the individual angles may differ
    /// from the ones that produced it.
    pub fn from_rotation(rotation: &Rotation3<f64>, order: EulerOrder) -> Self {
        let angles = if order.is_tait_bryan() {
            tait_bryan_angles(rotation, order)
        } else {
            proper_euler_angles(rotation, order)
        };
        Self { order, angles }
    }
}

/// An elemental rotation about one of the coordinate axes.
fn axis_rotation(axis: usize, angle: f64) -> Rotation3<f64> {
    let axis = match axis {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        _ => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&axis, angle)
}

/// +1 when `(first, second, third-axis)` is a cyclic permutation of (x, y, z),
/// -1 otherwise. The closed-form extraction below is sign-symmetric in this.
fn permutation_sign(first: usize, second: usize) -> f64 {
    if (second + 3 - first) % 3 == 1 {
        1.0
    } else {
        -1.0
    }
}

/// Extraction for sequences with three distinct axes.
///
/// With `R = R_k(θ2)·R_j(θ1)·R_i(θ0)` the element `R[k][i]` is `∓sin θ1` and
/// the surrounding row/column hold the outer angles scaled by `cos θ1`.
fn tait_bryan_angles(rotation: &Rotation3<f64>, order: EulerOrder) -> [f64; 3] {
    let (i, j, k) = order.axes();
    let sign = permutation_sign(i, j);
    let m = rotation.matrix();

    let sin_mid = (-sign * m[(k, i)]).clamp(-1.0, 1.0);
    if sin_mid.abs() < GIMBAL_THRESHOLD {
        [
            (sign * m[(k, j)]).atan2(m[(k, k)]),
            sin_mid.asin(),
            (sign * m[(j, i)]).atan2(m[(i, i)]),
        ]
    } else {
        // Gimbal lock: θ1 is ±π/2 and the matrix only determines a combination
        // of θ0 and θ2. Pin θ0 to zero and take the rest from the rotation
        // about k that remains once the middle rotation is stripped off.
        let mid = sin_mid.asin();
        let remainder = rotation * axis_rotation(j, mid).inverse();
        let m = remainder.matrix();
        [0.0, mid, (sign * m[(j, i)]).atan2(m[(i, i)])]
    }
}

/// Extraction for sequences with the first axis repeated as the third.
///
/// With `R = R_a(θ2)·R_b(θ1)·R_a(θ0)` the diagonal element `R[a][a]` is
/// `cos θ1` and the rotation degenerates when θ1 is 0 or π.
fn proper_euler_angles(rotation: &Rotation3<f64>, order: EulerOrder) -> [f64; 3] {
    let (a, b, _) = order.axes();
    let c = 3 - a - b;
    let sign = permutation_sign(a, b);
    let m = rotation.matrix();

    let cos_mid = m[(a, a)].clamp(-1.0, 1.0);
    if cos_mid.abs() < GIMBAL_THRESHOLD {
        [
            m[(a, b)].atan2(sign * m[(a, c)]),
            cos_mid.acos(),
            m[(b, a)].atan2(-sign * m[(c, a)]),
        ]
    } else {
        // θ1 is 0 or π, which merges the two rotations about `a`. Pin θ0 to
        // zero and recover θ2 from the remaining rotation about `a`.
        let mid = cos_mid.acos();
        let remainder = rotation * axis_rotation(b, mid).inverse();
        let m = remainder.matrix();
        [0.0, mid, (sign * m[(c, b)]).atan2(m[(b, b)])]
    }
}
