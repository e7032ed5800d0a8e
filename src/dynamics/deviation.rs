//! Plumb-line deviation between the undisturbed and the perturbed field.

use serde::Serialize;

use crate::core::vector::Vector;
use crate::error::VectorError;

/// How the angle between the two gravity vectors is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngleStrategy {
    /// Clamped `acos` of the normalized dot product.
    #[default]
    Exact,
    /// Legacy `sqrt((1 - cos θ)²)`, reported as if it were radians.
    ///
    /// For small θ this is about θ²/2, not θ.
    SmallAngle,
}

impl AngleStrategy {
    pub fn angle_between(self, perturbed: &Vector, background: &Vector) -> Result<f64, VectorError> {
        match self {
            AngleStrategy::Exact => perturbed.angle(background),
            AngleStrategy::SmallAngle => {
                let cosine = perturbed.unit()?.dot(&background.unit()?);
                Ok(((1.0 - cosine) * (1.0 - cosine)).sqrt())
            }
        }
    }
}

/// Angle in radians between the background field and the background field
/// plus the mountain's pull.
///
/// Fails with [`VectorError::NonFinite`] if the sum overflows.
pub fn deviation_angle(
    background: &Vector,
    deflecting: &Vector,
    strategy: AngleStrategy,
) -> Result<f64, VectorError> {
    let perturbed = background.add(deflecting).ensure_finite()?;
    strategy.angle_between(&perturbed, background)
}
