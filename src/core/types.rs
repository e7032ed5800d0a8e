use super::vector::Vector;
use crate::error::VectorError;

/// A point mass located relative to the plumb point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassPoint {
    pub position: Vector,
    /// Mass in kilograms.
    pub mass: f64,
}

impl MassPoint {
    pub fn new(position: Vector, mass: f64) -> Self {
        Self { position, mass }
    }

    /// Newtonian attraction exerted on a unit test mass at the origin.
    ///
    /// Points along `unit(position)` with magnitude `G·m/|position|²`.
    /// A non-finite mass or an overflowing strength is reported as
    /// [`VectorError::NonFinite`].
    pub fn attraction(&self, gravitational_constant: f64) -> Result<Vector, VectorError> {
        let distance = self.position.magnitude();
        let strength = gravitational_constant * self.mass / (distance * distance);
        self.position.unit()?.scale(strength).ensure_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn attraction_points_toward_mass_and_follows_inverse_square() {
        let near = MassPoint::new(Vector::new(-2.0, 0.0, 0.0).unwrap(), 10.0);
        let far = MassPoint::new(Vector::new(-4.0, 0.0, 0.0).unwrap(), 10.0);

        let near_force = near.attraction(1.0).unwrap();
        let far_force = far.attraction(1.0).unwrap();

        assert!(near_force.x() < 0.0);
        assert_relative_eq!(near_force.x(), -2.5);
        assert_relative_eq!(near_force.magnitude(), 4.0 * far_force.magnitude());
    }

    #[test]
    fn non_finite_mass_is_rejected() {
        let position = Vector::new(-2.0, 0.0, 0.0).unwrap();
        for mass in [f64::NAN, f64::INFINITY] {
            let point = MassPoint::new(position, mass);
            assert!(matches!(
                point.attraction(1.0),
                Err(VectorError::NonFinite { .. })
            ));
        }
    }

    #[test]
    fn mass_at_origin_has_no_direction() {
        let point = MassPoint::new(Vector::ZERO, 1.0);
        assert!(point.attraction(1.0).is_err());
    }
}
