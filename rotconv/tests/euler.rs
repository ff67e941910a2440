use approx::assert_relative_eq;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rotconv::nalgebra::Rotation3;
use rotconv::{EulerAngles, EulerOrder};
use std::f64::consts::{FRAC_PI_2, PI};

const EPSILON_APPROX: f64 = 1e-9;

const TAIT_BRYAN: [EulerOrder; 6] = [
    EulerOrder::Xyz,
    EulerOrder::Xzy,
    EulerOrder::Yxz,
    EulerOrder::Yzx,
    EulerOrder::Zxy,
    EulerOrder::Zyx,
];

const PROPER_EULER: [EulerOrder; 6] = [
    EulerOrder::Xyx,
    EulerOrder::Xzx,
    EulerOrder::Yxy,
    EulerOrder::Yzy,
    EulerOrder::Zxz,
    EulerOrder::Zyz,
];

/// Away from gimbal lock the decomposition is unique, so the exact angles come
/// back, not just an equivalent rotation. The middle angle is kept inside the
/// principal range of each family and the outer angles away from the ±π wrap.
#[test]
fn angles_recovered_away_from_gimbal_lock() {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..50 {
        let outer0 = rng.gen_range(-3.0..3.0);
        let outer2 = rng.gen_range(-3.0..3.0);

        for order in TAIT_BRYAN {
            let mid = rng.gen_range(-1.3..1.3);
            let euler = EulerAngles::new(order, [outer0, mid, outer2]);
            let recovered = EulerAngles::from_rotation(&euler.rotation(), order);
            for (expected, actual) in euler.angles.iter().zip(&recovered.angles) {
                assert_relative_eq!(expected, actual, epsilon = EPSILON_APPROX);
            }
        }

        for order in PROPER_EULER {
            let mid = rng.gen_range(0.2..2.9);
            let euler = EulerAngles::new(order, [outer0, mid, outer2]);
            let recovered = EulerAngles::from_rotation(&euler.rotation(), order);
            for (expected, actual) in euler.angles.iter().zip(&recovered.angles) {
                assert_relative_eq!(expected, actual, epsilon = EPSILON_APPROX);
            }
        }
    }
}

/// At gimbal lock the angles are non-unique, but the recovered triple must
/// still compose back to the same rotation, with the first angle pinned to
/// zero by convention.
#[test]
fn gimbal_lock_still_reproduces_the_rotation() {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..25 {
        let outer0 = rng.gen_range(-3.0..3.0);
        let outer2 = rng.gen_range(-3.0..3.0);

        for order in TAIT_BRYAN {
            for mid in [FRAC_PI_2, -FRAC_PI_2] {
                let euler = EulerAngles::new(order, [outer0, mid, outer2]);
                let rotation = euler.rotation();
                let recovered = EulerAngles::from_rotation(&rotation, order);
                assert_eq!(recovered.angles[0], 0.0);
                assert_relative_eq!(rotation, recovered.rotation(), epsilon = EPSILON_APPROX);
            }
        }

        for order in PROPER_EULER {
            for mid in [0.0, PI] {
                let euler = EulerAngles::new(order, [outer0, mid, outer2]);
                let rotation = euler.rotation();
                let recovered = EulerAngles::from_rotation(&rotation, order);
                assert_eq!(recovered.angles[0], 0.0);
                assert_relative_eq!(rotation, recovered.rotation(), epsilon = EPSILON_APPROX);
            }
        }
    }
}

/// The convention: angles rotate about the fixed world axes in tag order.
/// For `Xyz`, a quarter turn about x then a quarter turn about z sends
/// ŷ → ẑ (x rotation) and then leaves ẑ in place.
#[test]
fn fixed_axis_application_order() {
    let euler = EulerAngles::new(EulerOrder::Xyz, [FRAC_PI_2, 0.0, FRAC_PI_2]);
    let rotated = euler.rotation() * rotconv::nalgebra::Vector3::y();
    assert_relative_eq!(
        rotated,
        rotconv::nalgebra::Vector3::z(),
        epsilon = EPSILON_APPROX
    );

    // The reverse tag applies z first: ŷ → -x̂, which the later x rotation
    // leaves alone.
    let euler = EulerAngles::new(EulerOrder::Zyx, [FRAC_PI_2, 0.0, FRAC_PI_2]);
    let rotated = euler.rotation() * rotconv::nalgebra::Vector3::y();
    assert_relative_eq!(
        rotated,
        -rotconv::nalgebra::Vector3::x(),
        epsilon = EPSILON_APPROX
    );
}

/// Each elemental matrix matches nalgebra's own single-axis rotations.
#[test]
fn elemental_rotations_match_nalgebra() {
    for (order, axis) in [
        (EulerOrder::Xyz, Rotation3::from_euler_angles(0.7, 0.0, 0.0)),
        (EulerOrder::Yzx, Rotation3::from_euler_angles(0.0, 0.7, 0.0)),
        (EulerOrder::Zxy, Rotation3::from_euler_angles(0.0, 0.0, 0.7)),
    ] {
        let euler = EulerAngles::new(order, [0.7, 0.0, 0.0]);
        assert_relative_eq!(euler.rotation(), axis, epsilon = EPSILON_APPROX);
    }
}

#[test]
fn axes_and_family_classification() {
    assert_eq!(EulerOrder::Xyz.axes(), (0, 1, 2));
    assert_eq!(EulerOrder::Zyz.axes(), (2, 1, 2));
    assert!(EulerOrder::Xyz.is_tait_bryan());
    assert!(EulerOrder::Zxy.is_tait_bryan());
    assert!(!EulerOrder::Zyz.is_tait_bryan());
    assert!(!EulerOrder::Xyx.is_tait_bryan());
}
