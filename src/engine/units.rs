//! Length conversions and rounding helpers.

use crate::constants::units::{CM_PER_FOOT, FEET_PER_MILE, INCHES_PER_FOOT, KM_PER_MILE};
use crate::types::StrideFeet;

/// Inches to feet.
pub fn feet_from_inches(inches: f64) -> f64 {
    inches / INCHES_PER_FOOT
}

/// Centimeters to feet.
pub fn feet_from_centimeters(cm: f64) -> f64 {
    cm / CM_PER_FOOT
}

/// Feet to inches.
pub fn inches_from_feet(feet: f64) -> f64 {
    feet * INCHES_PER_FOOT
}

/// Feet to centimeters.
pub fn centimeters_from_feet(feet: f64) -> f64 {
    feet * CM_PER_FOOT
}

/// Feet to miles.
pub fn miles_from_feet(feet: f64) -> f64 {
    feet / FEET_PER_MILE
}

/// Miles to kilometers.
pub fn kilometers_from_miles(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Kilometers to miles.
pub fn miles_from_kilometers(km: f64) -> f64 {
    km / KM_PER_MILE
}

/// Steps needed to cover one mile at `stride`.
pub fn steps_per_mile(stride: StrideFeet) -> u32 {
    round_count(FEET_PER_MILE / stride.get())
}

/// Steps per kilometer, derived from an already rounded steps-per-mile.
pub fn steps_per_km(steps_per_mile: u32) -> u32 {
    round_count(f64::from(steps_per_mile) / KM_PER_MILE)
}

/// Round half up (toward positive infinity), matching browser `Math.round`.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round a non-negative quantity to a whole count, saturating at the `u32` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_count(x: f64) -> u32 {
    if x.is_nan() {
        return 0;
    }
    round_half_up(x).clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Round to a number of decimal places.
pub fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    round_half_up(x * scale) / scale
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn conversions_use_fixed_factors() {
        assert!((feet_from_inches(30.0) - 2.5).abs() < 1e-12);
        assert!((feet_from_centimeters(30.48) - 1.0).abs() < 1e-12);
        assert!((miles_from_feet(5280.0) - 1.0).abs() < 1e-12);
        assert!((kilometers_from_miles(1.0) - 1.60934).abs() < 1e-12);
        assert!((miles_from_kilometers(1.60934) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn steps_per_mile_for_custom_stride() {
        let stride = StrideFeet::new(2.5).unwrap();
        assert_eq!(steps_per_mile(stride), 2112);
        assert_eq!(steps_per_km(2112), 1312);
    }

    #[test]
    fn rounding_matches_browser_semantics() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) - -2.0).abs() < f64::EPSILON);
        assert_eq!(round_count(-4.0), 0);
        assert_eq!(round_count(f64::NAN), 0);
        assert_eq!(round_count(1e12), u32::MAX);
        assert!((round_to(4.322_916, 2) - 4.32).abs() < 1e-9);
    }
}
