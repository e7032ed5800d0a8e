//! Truncated-cone mountain geometry and its point-mass decompositions.
//!
//! Coordinates are measured from the plumb point, which sits at ground level
//! on the edge of the mountain's base. The mountain axis is therefore the
//! vertical line through `(-base_radius, 0, z)`, with `z` pointing up.

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use super::vector::Vector;
use crate::error::VectorError;

/// Number of equal-volume pieces used by the five-point decomposition.
pub const FIVE_POINT_PIECES: u32 = 5;

/// Centroid coefficient of a half-disc, `4/(3π)`.
const HALF_DISC_CENTROID: f64 = 4.0 / (3.0 * PI);

/// Solid mountain modelled as a truncated cone.
///
/// Callers must supply `height > 0` and `base_radius > top_radius > 0`;
/// other inputs produce non-finite geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub height: f64,
    pub base_radius: f64,
    pub top_radius: f64,
}

impl Frustum {
    pub fn new(height: f64, base_radius: f64, top_radius: f64) -> Self {
        Self {
            height,
            base_radius,
            top_radius,
        }
    }

    /// `π/3·h·(r1² + r1·r2 + r2²)`
    pub fn volume(&self) -> f64 {
        frustum_volume(self.height, self.base_radius, self.top_radius)
    }

    /// Height of the mass centre above the base.
    pub fn centroid_height(&self) -> f64 {
        first_moment_height(self.height, self.base_radius, self.top_radius)
    }

    /// Vector from the plumb point to the single-point mass centre.
    pub fn centroid_position(&self) -> Result<Vector, VectorError> {
        Vector::new(-self.base_radius, 0.0, self.centroid_height())
    }

    /// Radius at which the cone is cut so that the upper piece holds
    /// `1/pieces` of the total volume.
    pub fn split_radius(&self, pieces: u32) -> f64 {
        let r1 = self.base_radius;
        let r2 = self.top_radius;
        ((r1.powi(3) - r2.powi(3)) / f64::from(pieces) + r2.powi(3)).cbrt()
    }

    /// Splits the mountain into an upper frustum holding a fifth of the
    /// volume and a lower frustum carved into four symmetric quadrants.
    pub fn five_point_split(&self) -> Result<FivePointSplit, VectorError> {
        let h = self.height;
        let r1 = self.base_radius;
        let r2 = self.top_radius;

        let split_radius = self.split_radius(FIVE_POINT_PIECES);
        let upper_height = h * (split_radius - r2) / (r1 - r2);
        let lower_height = h - upper_height;
        debug!(
            "Calculated split parameters are: rs = {split_radius} hs2 = {upper_height} hs1 = {lower_height}"
        );

        let upper_centroid = first_moment_height(upper_height, split_radius, r2);
        let lower_centroid = first_moment_height(lower_height, r1, split_radius);
        let radius_at_centroid = r1 - (r1 - split_radius) * lower_centroid / lower_height;
        let quadrant_offset = radius_at_centroid * HALF_DISC_CENTROID;
        debug!(
            "Coordinates are: z2c = {upper_centroid} z1c = {lower_centroid} x1c = {quadrant_offset}"
        );

        let (x, y, z) = (quadrant_offset, quadrant_offset, lower_centroid);
        let positions = [
            Vector::new(x - r1, y, z)?,
            Vector::new(-x - r1, y, z)?,
            Vector::new(-x - r1, -y, z)?,
            Vector::new(x - r1, -y, z)?,
            Vector::new(-r1, 0.0, upper_centroid + lower_height)?,
        ];
        debug!(
            "Vectors to the centers of the masses from the plumb: {}, {}, {}, {}, {}",
            positions[0], positions[1], positions[2], positions[3], positions[4]
        );

        Ok(FivePointSplit {
            frustum: *self,
            split_radius,
            lower_height,
            upper_height,
            lower_centroid,
            upper_centroid,
            quadrant_offset,
            positions,
        })
    }
}

/// Result of [`Frustum::five_point_split`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FivePointSplit {
    pub frustum: Frustum,
    /// Radius of the cut plane (`rs`).
    pub split_radius: f64,
    /// Height of the lower frustum (`hs1`).
    pub lower_height: f64,
    /// Height of the upper frustum (`hs2`).
    pub upper_height: f64,
    /// Centroid height of the lower frustum above the base (`z1c`).
    pub lower_centroid: f64,
    /// Centroid height of the upper frustum above the cut plane (`z2c`).
    pub upper_centroid: f64,
    /// Horizontal offset of each quadrant mass from the axis (`x1c = y1c`).
    pub quadrant_offset: f64,
    /// Four quadrant masses followed by the on-axis upper mass.
    pub positions: [Vector; 5],
}

impl FivePointSplit {
    /// Exact volumes of the five pieces, in the same order as `positions`.
    pub fn sub_volumes(&self) -> [f64; 5] {
        let Frustum {
            base_radius,
            top_radius,
            ..
        } = self.frustum;
        let quadrant =
            frustum_volume(self.lower_height, base_radius, self.split_radius) / 4.0;
        let upper = frustum_volume(self.upper_height, self.split_radius, top_radius);
        [quadrant, quadrant, quadrant, quadrant, upper]
    }
}

fn frustum_volume(height: f64, bottom_radius: f64, top_radius: f64) -> f64 {
    PI / 3.0 * height * (bottom_radius.powi(2) + bottom_radius * top_radius + top_radius.powi(2))
}

/// First moment of the axial profile over its area, measured from the bottom.
fn first_moment_height(height: f64, bottom_radius: f64, top_radius: f64) -> f64 {
    let taper = bottom_radius - top_radius;
    let h2 = height * height;
    (top_radius * h2 / 2.0 + taper * h2 / 6.0) / (top_radius * height + taper * height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> Frustum {
        Frustum::new(1080.0, 3000.0, 50.0)
    }

    #[test]
    fn volume_matches_truncated_cone_formula() {
        assert_relative_eq!(reference().volume(), 10_351_233_634.313_01, max_relative = 1e-12);
    }

    #[test]
    fn cylinder_centroid_is_half_height() {
        let cylinder = Frustum::new(10.0, 2.0, 2.0);
        assert_relative_eq!(cylinder.centroid_height(), 5.0);
    }

    #[test]
    fn split_parameters_match_reference_run() {
        let split = reference().five_point_split().unwrap();
        assert_relative_eq!(split.split_radius, 1754.421_472_556_196, max_relative = 1e-12);
        assert_relative_eq!(split.upper_height, 623.991_589_952_776_8, max_relative = 1e-12);
        assert_relative_eq!(split.lower_height, 456.008_410_047_223_15, max_relative = 1e-12);
        assert_relative_eq!(split.upper_centroid, 213.760_739_144_029_23, max_relative = 1e-12);
        assert_relative_eq!(split.lower_centroid, 208.093_114_993_442_58, max_relative = 1e-12);
        assert_relative_eq!(split.quadrant_offset, 1032.002_035_525_138_1, max_relative = 1e-12);
    }

    #[test]
    fn quadrant_masses_are_symmetric_about_axis() {
        let frustum = reference();
        let split = frustum.five_point_split().unwrap();
        let axis = Vector::new(-frustum.base_radius, 0.0, 0.0).unwrap();

        let offsets: Vec<Vector> = split.positions[..4]
            .iter()
            .map(|p| Vector::new(p.x() - axis.x(), p.y(), 0.0).unwrap())
            .collect();
        let sum: Vector = offsets.iter().copied().sum();
        assert_relative_eq!(sum.magnitude(), 0.0, epsilon = 1e-9);
        for offset in &offsets {
            assert_relative_eq!(offset.magnitude(), offsets[0].magnitude(), max_relative = 1e-12);
        }
        assert_eq!(split.positions[4].x(), -frustum.base_radius);
        assert_eq!(split.positions[4].y(), 0.0);
    }

    #[test]
    fn upper_piece_holds_one_fifth() {
        let frustum = reference();
        let split = frustum.five_point_split().unwrap();
        assert_relative_eq!(split.sub_volumes()[4], frustum.volume() / 5.0, max_relative = 1e-12);
    }

    #[test]
    fn inverted_geometry_surfaces_as_vector_error() {
        let frustum = Frustum::new(100.0, 50.0, 50.0);
        assert!(matches!(
            frustum.five_point_split(),
            Err(VectorError::NonFinite { .. })
        ));
    }
}
