use approx::{assert_abs_diff_eq, assert_relative_eq};
use plumb_deflection::*;
use std::f64::consts::PI;

fn samples() -> Vec<Vector> {
    [
        [1.0, 0.0, 0.0],
        [0.0, -2.0, 0.5],
        [3.0, 4.0, 12.0],
        [-3000.0, 0.0, 365.9],
        [1e-3, 2e-3, -7e-4],
        [-0.25, 8.0, -9.81],
    ]
    .into_iter()
    .map(|c| Vector::try_from(c).expect("sample vectors are finite"))
    .collect()
}

#[test]
fn dot_is_symmetric() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.dot(&b), b.dot(&a));
        }
    }
}

#[test]
fn cross_is_anticommutative() {
    for a in samples() {
        for b in samples() {
            let ab = a.cross(&b);
            let ba = b.cross(&a).scale(-1.0);
            assert_abs_diff_eq!(ab.x(), ba.x(), epsilon = 1e-9);
            assert_abs_diff_eq!(ab.y(), ba.y(), epsilon = 1e-9);
            assert_abs_diff_eq!(ab.z(), ba.z(), epsilon = 1e-9);
        }
    }
}

#[test]
fn cross_magnitude_matches_sine_of_angle() {
    for a in samples() {
        for b in samples() {
            let expected = a.magnitude() * b.magnitude() * a.angle(&b).unwrap().sin();
            assert_abs_diff_eq!(
                a.cross(&b).magnitude(),
                expected,
                epsilon = 1e-6 * a.magnitude() * b.magnitude()
            );
        }
    }
}

#[test]
fn unit_vectors_have_length_one() {
    for v in samples() {
        assert_relative_eq!(v.unit().unwrap().magnitude(), 1.0, max_relative = 1e-12);
    }
    assert_eq!(Vector::ZERO.unit(), Err(VectorError::ZeroLength));
}

#[test]
fn subtract_undoes_add() {
    for a in samples() {
        for b in samples() {
            let back = a.add(&b).subtract(&b);
            let tolerance = 1e-12 * (a.magnitude() + b.magnitude());
            assert_abs_diff_eq!(back.x(), a.x(), epsilon = tolerance);
            assert_abs_diff_eq!(back.y(), a.y(), epsilon = tolerance);
            assert_abs_diff_eq!(back.z(), a.z(), epsilon = tolerance);
        }
    }
}

#[test]
fn angle_to_self_and_opposite() {
    for v in samples() {
        assert_abs_diff_eq!(v.angle(&v).unwrap(), 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(v.angle(&v.scale(-1.0)).unwrap(), PI, epsilon = 1e-7);
    }
}

#[test]
fn deserialization_rejects_non_finite_components() {
    let parsed: Vector = serde_yaml::from_str("[1.0, 2.0, 3.0]").unwrap();
    assert_eq!(parsed, Vector::new(1.0, 2.0, 3.0).unwrap());

    assert!(serde_yaml::from_str::<Vector>("[1.0, .nan, 3.0]").is_err());
    assert!(serde_yaml::from_str::<Vector>("[1.0, 2.0]").is_err());
}
