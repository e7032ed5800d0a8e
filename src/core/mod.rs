//! Core value types: the vector algebra, mountain geometry, and point masses.

pub mod frustum;
pub mod types;
pub mod vector;

pub use frustum::{FivePointSplit, Frustum};
pub use types::MassPoint;
pub use vector::Vector;
