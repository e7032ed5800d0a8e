use std::fmt;

use log::info;
use serde::Serialize;

use crate::{
    config::SurveyConfig,
    core::vector::Vector,
    dynamics::{
        deviation::{AngleStrategy, deviation_angle},
        forces::{FivePointModel, MassModel, OnePointModel},
    },
    error::Result,
    utils::{
        logging::ScopedTimer,
        math::{Dms, percent_difference, radians_to_degrees},
    },
};

const RULE: &str =
    "-----------------------------------------------------------------------------------------------------";

/// How deviation angles are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleFormat {
    /// Decimal degrees.
    #[default]
    Degrees,
    /// Degrees, minutes and seconds.
    Dms,
}

/// Both model predictions for a single rock density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityReport {
    pub density: f64,
    pub one_point_force: Vector,
    pub five_point_force: Vector,
    /// Radians.
    pub one_point_angle: f64,
    /// Radians.
    pub five_point_angle: f64,
}

impl DensityReport {
    /// `(five − one) / five · 100`
    pub fn percent_difference(&self) -> f64 {
        percent_difference(self.five_point_angle, self.one_point_angle)
    }

    pub fn display(&self, format: AngleFormat) -> ReportDisplay<'_> {
        ReportDisplay {
            report: self,
            format,
        }
    }
}

/// Machine-readable record of a whole sweep, written out as YAML.
#[derive(Debug, Clone, Serialize)]
pub struct SweepDocument<'a> {
    pub config: &'a SurveyConfig,
    pub strategy: AngleStrategy,
    pub reports: Vec<DensityReport>,
}

impl SweepDocument<'_> {
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Geometry-dependent state shared by every density of a sweep.
///
/// The mass decompositions are computed once at construction; only the
/// point masses change with density.
#[derive(Debug, Clone)]
pub struct Survey {
    one_point: OnePointModel,
    five_point: FivePointModel,
    background: Vector,
    gravitational_constant: f64,
}

impl Survey {
    pub fn new(config: &SurveyConfig) -> Result<Self> {
        Ok(Self {
            one_point: OnePointModel::new(&config.mountain)?,
            five_point: FivePointModel::new(&config.mountain)?,
            background: config.background_field()?,
            gravitational_constant: config.gravitational_constant,
        })
    }

    pub fn one_point(&self) -> &OnePointModel {
        &self.one_point
    }

    pub fn five_point(&self) -> &FivePointModel {
        &self.five_point
    }

    pub fn background(&self) -> Vector {
        self.background
    }

    pub fn evaluate(&self, density: f64, strategy: AngleStrategy) -> Result<DensityReport> {
        info!("the density is: {density}");

        let five_point_force = self
            .five_point
            .deflecting_force(density, self.gravitational_constant)?;
        info!(
            "the resulting force vector in the {} model: {five_point_force}",
            self.five_point.name()
        );

        let one_point_force = self
            .one_point
            .deflecting_force(density, self.gravitational_constant)?;
        info!(
            "the resulting force vector in the {} model: {one_point_force}",
            self.one_point.name()
        );

        Ok(DensityReport {
            density,
            one_point_force,
            five_point_force,
            one_point_angle: deviation_angle(&self.background, &one_point_force, strategy)?,
            five_point_angle: deviation_angle(&self.background, &five_point_force, strategy)?,
        })
    }

    /// Evaluates every density in order.
    pub fn sweep(&self, densities: &[f64], strategy: AngleStrategy) -> Result<Vec<DensityReport>> {
        let _timer = ScopedTimer::new("density sweep");
        densities
            .iter()
            .map(|&density| self.evaluate(density, strategy))
            .collect()
    }
}

/// Text rendering of a [`DensityReport`].
pub struct ReportDisplay<'a> {
    report: &'a DensityReport,
    format: AngleFormat,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;
        writeln!(f, "{RULE}")?;
        writeln!(f, "For rock density {} kg/m^3", report.density)?;
        writeln!(f, "The plumb is at the level of the foot of the mountain")?;
        writeln!(f, "{RULE}")?;
        for (label, angle) in [
            ("5 points model", report.five_point_angle),
            ("1 point model ", report.one_point_angle),
        ] {
            write!(f, "{label} predicts that the plumb line deviation at the foot of the mountain is ")?;
            match self.format {
                AngleFormat::Degrees => writeln!(f, "{} degree", radians_to_degrees(angle))?,
                AngleFormat::Dms => writeln!(f, "{}", Dms::from_radians(angle))?,
            }
        }
        writeln!(f, "The difference is {} percents", report.percent_difference())
    }
}
