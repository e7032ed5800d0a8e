//! Error types for Plumb Deflection.
//!
//! [`VectorError`] covers the vector algebra, [`DeflectionError`] wraps it
//! together with configuration failures behind a single [`Result`] alias.

use std::fmt;

/// Failures raised by [`crate::Vector`] operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// A component was NaN or infinite.
    NonFinite { x: f64, y: f64, z: f64 },
    /// Normalization or an angle was requested for a zero-length vector.
    ZeroLength,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonFinite { x, y, z } => {
                write!(f, "vector components must be finite, got ({x}, {y}, {z})")
            }
            Self::ZeroLength => write!(f, "operation undefined for a zero-length vector"),
        }
    }
}

impl std::error::Error for VectorError {}

/// Main error type for the crate.
#[derive(Debug)]
pub enum DeflectionError {
    /// Vector construction or normalization failed.
    Vector(VectorError),
    /// A survey configuration could not be parsed or is unusable.
    Config(String),
    /// Reading a configuration file failed.
    Io(std::io::Error),
}

impl fmt::Display for DeflectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Vector(err) => write!(f, "Vector error: {err}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for DeflectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vector(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

/// Convenient Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, DeflectionError>;

impl From<VectorError> for DeflectionError {
    fn from(err: VectorError) -> Self {
        Self::Vector(err)
    }
}

impl From<std::io::Error> for DeflectionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for DeflectionError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn vector_errors_expose_source() {
        let err: DeflectionError = VectorError::ZeroLength.into();
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Vector error: operation undefined for a zero-length vector"
        );
    }

    #[test]
    fn non_finite_message_lists_components() {
        let err = VectorError::NonFinite {
            x: 1.0,
            y: f64::NAN,
            z: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "vector components must be finite, got (1, NaN, 0)"
        );
    }
}
