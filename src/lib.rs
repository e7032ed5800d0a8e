//! Plumb Deflection – how far a mountain pulls a plumb line off vertical.
//!
//! The mountain is modelled as a truncated cone whose mass is lumped into
//! either a single point or five equal-volume points. Each point attracts the
//! plumb bob with Newtonian gravity, and the summed pull tilts the local
//! gravity vector by a small angle that is compared between the two models.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod survey;
pub mod utils;

pub use config::{Preset, SurveyConfig};
pub use crate::core::{
    frustum::{FivePointSplit, Frustum},
    types::MassPoint,
    vector::Vector,
};
pub use dynamics::{
    deviation::{AngleStrategy, deviation_angle},
    forces::{FivePointModel, MassModel, OnePointModel},
};
pub use error::{DeflectionError, Result, VectorError};
pub use survey::{AngleFormat, DensityReport, Survey, SweepDocument};
pub use utils::math::Dms;

/// High-level convenience wrapper that owns a configuration and a [`Survey`].
pub struct DeflectionSurvey {
    config: SurveyConfig,
    survey: Survey,
    strategy: AngleStrategy,
}

impl DeflectionSurvey {
    /// Validates the configuration and precomputes both mass decompositions.
    pub fn new(config: SurveyConfig) -> Result<Self> {
        config.validate()?;
        let survey = Survey::new(&config)?;
        Ok(Self {
            config,
            survey,
            strategy: AngleStrategy::default(),
        })
    }

    /// Selects how deviation angles are computed.
    pub fn with_strategy(mut self, strategy: AngleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> AngleStrategy {
        self.strategy
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// Evaluates every configured density in order.
    pub fn run(&self) -> Result<Vec<DensityReport>> {
        self.survey.sweep(&self.config.densities, self.strategy)
    }

    /// Runs the sweep and renders all reports as text.
    pub fn render(&self, format: AngleFormat) -> Result<String> {
        Ok(self
            .run()?
            .iter()
            .map(|report| report.display(format).to_string())
            .collect())
    }

    /// Runs the sweep and serializes configuration, strategy and reports as YAML.
    pub fn render_yaml(&self) -> Result<String> {
        SweepDocument {
            config: &self.config,
            strategy: self.strategy,
            reports: self.run()?,
        }
        .to_yaml()
    }
}
