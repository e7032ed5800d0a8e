//! Angle and unit helpers used when reporting deviations.

use std::f64::consts::PI;
use std::fmt;

const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// `acos` with its argument clamped into `[-1, 1]`.
pub fn clamped_acos(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians / PI * 180.0
}

/// Relative difference of `reference` against `other`, in percent of `reference`.
pub fn percent_difference(reference: f64, other: f64) -> f64 {
    (reference - other) / reference * 100.0
}

/// An angle split into whole degrees, whole minutes and fractional seconds.
///
/// All three fields carry the sign of the input angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    pub fn from_decimal_degrees(decimal: f64) -> Self {
        let sign = if decimal < 0.0 { -1.0 } else { 1.0 };
        let total_seconds = decimal.abs() * ARCSECONDS_PER_DEGREE;
        let total_minutes = (total_seconds / 60.0).floor();
        let seconds = total_seconds - total_minutes * 60.0;
        let degrees = (total_minutes / 60.0).floor();
        let minutes = total_minutes - degrees * 60.0;
        Self {
            degrees: sign * degrees,
            minutes: sign * minutes,
            seconds: sign * seconds,
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_decimal_degrees(radians_to_degrees(radians))
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}° {}′ {}″", self.degrees, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn clamped_acos_never_returns_nan() {
        assert_eq!(clamped_acos(1.0 + 1e-15), 0.0);
        assert_abs_diff_eq!(clamped_acos(-1.0 - 1e-15), PI);
    }

    #[test]
    fn dms_splits_positive_angle() {
        let dms = Dms::from_decimal_degrees(10.5125);
        assert_eq!(dms.degrees, 10.0);
        assert_eq!(dms.minutes, 30.0);
        assert_abs_diff_eq!(dms.seconds, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn dms_mirrors_sign_on_every_field() {
        let dms = Dms::from_decimal_degrees(-1.5);
        assert_eq!(dms.degrees, -1.0);
        assert_eq!(dms.minutes, -30.0);
        assert_abs_diff_eq!(dms.seconds, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn small_deflections_stay_in_seconds() {
        let dms = Dms::from_radians(2.4e-5);
        assert_eq!(dms.degrees, 0.0);
        assert_eq!(dms.minutes, 0.0);
        assert_abs_diff_eq!(dms.seconds, 4.950355, epsilon = 1e-5);
    }

    #[test]
    fn display_keeps_full_seconds_precision() {
        assert_eq!(Dms::from_decimal_degrees(1.5).to_string(), "1° 30′ 0″");

        let dms = Dms::from_radians(2.4e-5);
        let text = dms.to_string();
        let shown = text
            .trim_end_matches('″')
            .rsplit(' ')
            .next()
            .unwrap();
        assert_eq!(shown.parse::<f64>().unwrap(), dms.seconds);
    }

    #[test]
    fn percent_difference_is_relative_to_reference() {
        assert_abs_diff_eq!(percent_difference(4.0, 3.0), 25.0);
    }
}
