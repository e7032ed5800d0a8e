use std::fmt;
use std::iter::Sum;
use std::ops;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// Immutable 3D vector with finite `f64` components.
///
/// Dot and cross products are named methods; only addition, subtraction,
/// negation and scalar scaling are available as operators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector(DVec3);

impl Vector {
    pub const ZERO: Vector = Vector(DVec3::ZERO);

    /// Builds a vector, rejecting NaN and infinite components.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, VectorError> {
        if x.is_finite() && y.is_finite() && z.is_finite() {
            Ok(Self(DVec3::new(x, y, z)))
        } else {
            Err(VectorError::NonFinite { x, y, z })
        }
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Euclidean norm.
    ///
    /// Components are rescaled by the largest one first, so finite vectors
    /// near the ends of the `f64` range neither overflow nor underflow.
    pub fn magnitude(&self) -> f64 {
        let largest = self.0.abs().max_element();
        if largest == 0.0 {
            return 0.0;
        }
        largest * (self.0 / largest).length()
    }

    /// Returns the vector scaled to length one.
    pub fn unit(&self) -> Result<Self, VectorError> {
        let largest = self.0.abs().max_element();
        if largest == 0.0 {
            return Err(VectorError::ZeroLength);
        }
        let rescaled = self.0 / largest;
        Ok(Self(rescaled / rescaled.length()))
    }

    /// Returns `self` if every component is still finite.
    ///
    /// Arithmetic does not re-check its results; call this where inputs
    /// may have overflowed or carried NaN.
    pub fn ensure_finite(self) -> Result<Self, VectorError> {
        Vector::try_from(self.0)
    }

    pub fn add(&self, other: &Vector) -> Vector {
        Self(self.0 + other.0)
    }

    pub fn subtract(&self, other: &Vector) -> Vector {
        Self(self.0 - other.0)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Vector) -> Vector {
        Self(self.0.cross(other.0))
    }

    pub fn scale(&self, k: f64) -> Vector {
        Self(self.0 * k)
    }

    /// Angle in radians between `self` and `other`, in `[0, π]`.
    ///
    /// Both operands are normalized first and the cosine is clamped to
    /// `[-1, 1]`, so neither magnitude overflow nor round-off on
    /// (anti)parallel vectors can produce NaN.
    pub fn angle(&self, other: &Vector) -> Result<f64, VectorError> {
        let cosine = self.unit()?.dot(&other.unit()?);
        Ok(crate::utils::math::clamped_acos(cosine))
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl TryFrom<[f64; 3]> for Vector {
    type Error = VectorError;

    fn try_from([x, y, z]: [f64; 3]) -> Result<Self, Self::Error> {
        Vector::new(x, y, z)
    }
}

impl TryFrom<DVec3> for Vector {
    type Error = VectorError;

    fn try_from(v: DVec3) -> Result<Self, Self::Error> {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.0.to_array()
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl ops::Add for Vector {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector::add(&self, &other)
    }
}

impl ops::Sub for Vector {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}

impl ops::Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Self {
        iter.fold(Vector::ZERO, |acc, v| acc + v)
    }
}
