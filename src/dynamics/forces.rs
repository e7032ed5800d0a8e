use crate::core::frustum::{FivePointSplit, Frustum, FIVE_POINT_PIECES};
use crate::core::types::MassPoint;
use crate::core::vector::Vector;
use crate::error::VectorError;

/// Trait describing a point-mass approximation of the mountain.
pub trait MassModel {
    /// Short label used in reports.
    fn name(&self) -> &'static str;

    /// Point masses for rock of the given density (kg/m³).
    fn mass_points(&self, density: f64) -> Vec<MassPoint>;

    /// Horizontal-and-vertical pull of all point masses on the plumb bob,
    /// per unit bob mass.
    fn deflecting_force(
        &self,
        density: f64,
        gravitational_constant: f64,
    ) -> Result<Vector, VectorError> {
        self.mass_points(density)
            .iter()
            .map(|point| point.attraction(gravitational_constant))
            .sum::<Result<Vector, VectorError>>()?
            .ensure_finite()
    }
}

/// Whole mountain concentrated at its centroid.
#[derive(Debug, Clone, Copy)]
pub struct OnePointModel {
    position: Vector,
    volume: f64,
}

impl OnePointModel {
    pub fn new(frustum: &Frustum) -> Result<Self, VectorError> {
        Ok(Self {
            position: frustum.centroid_position()?,
            volume: frustum.volume(),
        })
    }

    pub fn position(&self) -> Vector {
        self.position
    }
}

impl MassModel for OnePointModel {
    fn name(&self) -> &'static str {
        "1 point"
    }

    fn mass_points(&self, density: f64) -> Vec<MassPoint> {
        vec![MassPoint::new(self.position, self.volume * density)]
    }
}

/// Four quadrant masses in the lower frustum plus one on-axis mass above.
///
/// Every point carries a fifth of the total volume.
#[derive(Debug, Clone, Copy)]
pub struct FivePointModel {
    split: FivePointSplit,
    piece_volume: f64,
}

impl FivePointModel {
    pub fn new(frustum: &Frustum) -> Result<Self, VectorError> {
        Ok(Self {
            split: frustum.five_point_split()?,
            piece_volume: frustum.volume() / f64::from(FIVE_POINT_PIECES),
        })
    }

    pub fn split(&self) -> &FivePointSplit {
        &self.split
    }
}

impl MassModel for FivePointModel {
    fn name(&self) -> &'static str {
        "5 points"
    }

    fn mass_points(&self, density: f64) -> Vec<MassPoint> {
        let mass = self.piece_volume * density;
        self.split
            .positions
            .iter()
            .map(|&position| MassPoint::new(position, mass))
            .collect()
    }
}
