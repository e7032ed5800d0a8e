//! Force superposition of the point-mass models and the resulting deviation.

pub mod deviation;
pub mod forces;

pub use deviation::{AngleStrategy, deviation_angle};
pub use forces::{FivePointModel, MassModel, OnePointModel};
