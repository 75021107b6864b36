//! Core type definitions for compile-time safety.
//!
//! Enumerated calculator options and small value types. Stride lengths are
//! wrapped in [`StrideFeet`] so a non-positive stride cannot reach the
//! conversion formulas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::activity::{ActivityProfile, RUNNING, WALKING};
use crate::constants::defaults;
use crate::constants::units::INCHES_PER_FOOT;
use crate::engine::units::{centimeters_from_feet, inches_from_feet};
use crate::error::Error;

/// Walking or running. Selects the stride, calorie and pace estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    /// Walking at a moderate pace.
    #[default]
    Walking,
    /// Running.
    Running,
}

impl Activity {
    /// Returns all activity variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Walking, Self::Running]
    }

    /// Returns the human-readable name of this activity.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Running => "Running",
        }
    }

    /// Lowercase keyword, as used in config files and narrative text.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Running => "running",
        }
    }

    /// Verb form used in sentences ("you'd need to walk ...").
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Walking => "walk",
            Self::Running => "run",
        }
    }

    /// Cycle to the other activity.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Walking => Self::Running,
            Self::Running => Self::Walking,
        }
    }

    /// Fixed estimates for this activity.
    #[must_use]
    pub const fn profile(self) -> &'static ActivityProfile {
        match self {
            Self::Walking => &WALKING,
            Self::Running => &RUNNING,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Activity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" | "walk" => Ok(Self::Walking),
            "running" | "run" => Ok(Self::Running),
            _ => Err(Error::unrecognized("activity", s)),
        }
    }
}

/// How the stride length is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrideMethod {
    /// Estimate from body height and activity.
    #[default]
    Height,
    /// Use a stride the user measured.
    Custom,
}

impl StrideMethod {
    /// Returns the human-readable name of this method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Height => "From height",
            Self::Custom => "Custom stride",
        }
    }

    /// Cycle to the other method.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Height => Self::Custom,
            Self::Custom => Self::Height,
        }
    }
}

/// Unit of a user-supplied stride length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrideUnit {
    /// Inches.
    #[default]
    #[serde(rename = "inches")]
    Inches,
    /// Centimeters.
    #[serde(rename = "cm")]
    Centimeters,
}

impl StrideUnit {
    /// Short label for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inches => "inches",
            Self::Centimeters => "cm",
        }
    }

    /// Cycle to the other unit.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Inches => Self::Centimeters,
            Self::Centimeters => Self::Inches,
        }
    }
}

impl FromStr for StrideUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "cm" | "centimeters" | "centimetres" => Ok(Self::Centimeters),
            _ => Err(Error::unrecognized("stride unit", s)),
        }
    }
}

/// Unit of a distance entered in Distance→Steps mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Statute miles.
    #[default]
    #[serde(rename = "miles")]
    Miles,
    /// Kilometers.
    #[serde(rename = "km")]
    Kilometers,
}

impl DistanceUnit {
    /// Short label for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miles => "miles",
            Self::Kilometers => "km",
        }
    }

    /// Cycle to the other unit.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Miles => Self::Kilometers,
            Self::Kilometers => Self::Miles,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            "km" | "kilometers" | "kilometres" => Ok(Self::Kilometers),
            _ => Err(Error::unrecognized("distance unit", s)),
        }
    }
}

/// Body height in feet and inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    /// Whole feet.
    pub feet: u32,
    /// Remaining inches.
    pub inches: u32,
}

impl Height {
    /// Create a height from feet and inches.
    #[must_use]
    pub const fn new(feet: u32, inches: u32) -> Self {
        Self { feet, inches }
    }

    /// Height expressed in fractional feet.
    #[must_use]
    pub fn total_feet(self) -> f64 {
        f64::from(self.feet) + f64::from(self.inches) / INCHES_PER_FOOT
    }
}

impl Default for Height {
    fn default() -> Self {
        Self::new(defaults::HEIGHT_FEET, defaults::HEIGHT_INCHES)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet, self.inches)
    }
}

/// Where the stride length comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum StrideInput {
    /// Estimate from height; the activity supplies the percentage.
    Height(Height),
    /// A measured stride in the given unit.
    Custom {
        /// Stride length in `unit`.
        value: f64,
        /// Unit of `value`.
        unit: StrideUnit,
    },
}

impl StrideInput {
    /// The method this input uses.
    #[must_use]
    pub const fn method(&self) -> StrideMethod {
        match self {
            Self::Height(_) => StrideMethod::Height,
            Self::Custom { .. } => StrideMethod::Custom,
        }
    }

    /// The height, when the stride is height-based.
    #[must_use]
    pub const fn height(&self) -> Option<Height> {
        match self {
            Self::Height(h) => Some(*h),
            Self::Custom { .. } => None,
        }
    }
}

impl Default for StrideInput {
    fn default() -> Self {
        Self::Height(Height::default())
    }
}

/// A resolved stride length in feet. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct StrideFeet(f64);

impl StrideFeet {
    /// Wrap a stride length, rejecting zero, negative and non-finite values.
    #[must_use]
    pub fn new(feet: f64) -> Option<Self> {
        (feet.is_finite() && feet > 0.0).then_some(Self(feet))
    }

    /// Stride in feet.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Stride in inches.
    #[must_use]
    pub fn inches(self) -> f64 {
        inches_from_feet(self.0)
    }

    /// Stride in centimeters.
    #[must_use]
    pub fn centimeters(self) -> f64 {
        centimeters_from_feet(self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn activity_parses_keywords() {
        assert_eq!("Running".parse::<Activity>().unwrap(), Activity::Running);
        assert_eq!(" walk ".parse::<Activity>().unwrap(), Activity::Walking);
        assert!("cycling".parse::<Activity>().is_err());
    }

    #[test]
    fn activity_cycles() {
        assert_eq!(Activity::Walking.next(), Activity::Running);
        assert_eq!(Activity::Running.next().next(), Activity::Running);
    }

    #[test]
    fn height_display_and_total() {
        let h = Height::new(5, 6);
        assert_eq!(h.to_string(), "5'6\"");
        assert!((h.total_feet() - 5.5).abs() < f64::EPSILON);
        assert_eq!(Height::default(), h);
    }

    #[test]
    fn stride_feet_rejects_non_positive() {
        assert!(StrideFeet::new(0.0).is_none());
        assert!(StrideFeet::new(-1.0).is_none());
        assert!(StrideFeet::new(f64::NAN).is_none());
        assert!(StrideFeet::new(f64::INFINITY).is_none());
        let s = StrideFeet::new(2.5).unwrap();
        assert!((s.inches() - 30.0).abs() < 1e-9);
        assert!((s.centimeters() - 76.2).abs() < 1e-9);
    }

    #[test]
    fn units_parse() {
        assert_eq!("km".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert_eq!("cm".parse::<StrideUnit>().unwrap(), StrideUnit::Centimeters);
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn stride_input_serializes_with_method_tag() {
        let json = serde_json::to_value(StrideInput::Custom { value: 30.0, unit: StrideUnit::Inches })
            .unwrap();
        assert_eq!(json["method"], "custom");
        assert_eq!(json["unit"], "inches");
    }
}
