//! Default constants and the loadable survey configuration.
//!
//! A survey can be read from YAML; every field is optional and falls back to
//! the defaults below:
//!
//! ```yaml
//! mountain:
//!   height: 1080.0        # m
//!   base_radius: 3000.0   # m
//!   top_radius: 50.0      # m
//! surface_gravity: 9.81   # m/s^2
//! gravitational_constant: 6.67e-11
//! densities: [2000.0, 2500.0, 3000.0, 3500.0, 4000.0]   # kg/m^3
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::core::frustum::Frustum;
use crate::core::vector::Vector;
use crate::error::{DeflectionError, Result};

/// Default mountain height (in metres).
pub const DEFAULT_HEIGHT: f64 = 1080.0;

/// Default radius of the mountain's foot (in metres).
pub const DEFAULT_BASE_RADIUS: f64 = 3000.0;

/// Default radius of the mountain's flattened summit (in metres).
pub const DEFAULT_TOP_RADIUS: f64 = 50.0;

/// Surface gravity of the undisturbed field (in m/s²).
pub const DEFAULT_SURFACE_GRAVITY: f64 = 9.81;

/// Newtonian gravitational constant (in m³ kg⁻¹ s⁻²).
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 6.67e-11;

/// Rock densities evaluated by default (in kg/m³).
pub const DEFAULT_DENSITIES: [f64; 5] = [2000.0, 2500.0, 3000.0, 3500.0, 4000.0];

/// Built-in parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Broad, low massif (h = 1080 m, r1 = 3000 m, r2 = 50 m).
    #[default]
    Default,
    /// Narrow, steep peak (h = 1500 m, r1 = 400 m, r2 = 50 m).
    NarrowPeak,
}

impl Preset {
    pub fn mountain(self) -> Frustum {
        match self {
            Preset::Default => Frustum::new(DEFAULT_HEIGHT, DEFAULT_BASE_RADIUS, DEFAULT_TOP_RADIUS),
            Preset::NarrowPeak => Frustum::new(1500.0, 400.0, 50.0),
        }
    }
}

/// Everything needed to run a density sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub mountain: Frustum,
    pub surface_gravity: f64,
    pub gravitational_constant: f64,
    pub densities: Vec<f64>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Default)
    }
}

impl SurveyConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            mountain: preset.mountain(),
            surface_gravity: DEFAULT_SURFACE_GRAVITY,
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            densities: DEFAULT_DENSITIES.to_vec(),
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Undisturbed field `(0, 0, -g)`.
    pub fn background_field(&self) -> Result<Vector> {
        Ok(Vector::new(0.0, 0.0, -self.surface_gravity)?)
    }

    /// Rejects values that can never yield a meaningful report.
    ///
    /// Mountain geometry is not checked here; see [`Frustum`].
    pub fn validate(&self) -> Result<()> {
        if !(self.surface_gravity.is_finite() && self.surface_gravity > 0.0) {
            return Err(DeflectionError::Config(format!(
                "surface gravity must be positive, got {}",
                self.surface_gravity
            )));
        }
        if !self.gravitational_constant.is_finite() {
            return Err(DeflectionError::Config(format!(
                "gravitational constant must be finite, got {}",
                self.gravitational_constant
            )));
        }
        if self.densities.is_empty() {
            return Err(DeflectionError::Config(
                "at least one rock density is required".to_string(),
            ));
        }
        if let Some(density) = self.densities.iter().find(|d| !d.is_finite()) {
            return Err(DeflectionError::Config(format!(
                "rock densities must be finite, got {density}"
            )));
        }
        Ok(())
    }
}
