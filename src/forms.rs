//! Calculator forms.
//!
//! Each tab edits one form of raw text fields and enum selections. Turning a
//! form into an engine input applies lenient numeric coercion: integer fields
//! take their leading digits and decimal fields their leading number, and
//! anything unparseable counts as zero. Zero then fails validation in the
//! engine. Empty or unparseable height fields fall back to the configured
//! default height.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::{DistanceToStepsInput, StepsPerMileInput, StepsToDistanceInput};
use crate::types::{Activity, DistanceUnit, Height, StrideInput, StrideMethod, StrideUnit};

/// Leading integer, e.g. `"12abc"` → 12.
#[allow(clippy::expect_used)]
static RE_INT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?\d+)").expect("valid regex: RE_INT_PREFIX")
});

/// Leading decimal number, e.g. `"6.2 miles"` → 6.2.
#[allow(clippy::expect_used)]
static RE_FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid regex: RE_FLOAT_PREFIX")
});

/// Parse the leading integer of `text`, if any.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    RE_INT_PREFIX
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse the leading decimal number of `text`, if any.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    RE_FLOAT_PREFIX
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Leading integer clamped into `u32`; missing or negative counts as zero.
fn count_or_zero(text: &str) -> u32 {
    parse_int_prefix(text).map_or(0, |n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}

/// Stride fields shared by all three forms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrideFields {
    /// Height-based or custom.
    pub method: StrideMethod,
    /// Height, whole feet.
    pub height_feet: String,
    /// Height, remaining inches.
    pub height_inches: String,
    /// Custom stride value.
    pub custom_stride: String,
    /// Unit of the custom stride.
    pub stride_unit: StrideUnit,
}

impl StrideFields {
    /// Fields pre-filled with a height.
    pub fn with_height(height: Height) -> Self {
        Self {
            height_feet: height.feet.to_string(),
            height_inches: height.inches.to_string(),
            ..Self::default()
        }
    }

    /// Height from the text fields, each falling back to `default` when empty
    /// or unparseable.
    pub fn height(&self, default: Height) -> Height {
        let part = |text: &str, fallback: u32| {
            parse_int_prefix(text)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(fallback)
        };
        Height::new(part(&self.height_feet, default.feet), part(&self.height_inches, default.inches))
    }

    /// Stride input for the engine.
    pub fn to_stride_input(&self, default_height: Height) -> StrideInput {
        match self.method {
            StrideMethod::Height => StrideInput::Height(self.height(default_height)),
            StrideMethod::Custom => StrideInput::Custom {
                value: parse_float_prefix(&self.custom_stride).unwrap_or(0.0),
                unit: self.stride_unit,
            },
        }
    }
}

/// Steps→Distance form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepsForm {
    /// Step count.
    pub steps: String,
    /// Walking or running.
    pub activity: Activity,
    /// Stride fields.
    pub stride: StrideFields,
}

impl StepsForm {
    /// Engine input from the current field values.
    pub fn to_input(&self, default_height: Height) -> StepsToDistanceInput {
        StepsToDistanceInput {
            steps: count_or_zero(&self.steps),
            activity: self.activity,
            stride: self.stride.to_stride_input(default_height),
        }
    }
}

/// Distance→Steps form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistanceForm {
    /// Distance value.
    pub distance: String,
    /// Miles or kilometers.
    pub unit: DistanceUnit,
    /// Walking or running.
    pub activity: Activity,
    /// Stride fields.
    pub stride: StrideFields,
}

impl DistanceForm {
    /// Engine input from the current field values.
    pub fn to_input(&self, default_height: Height) -> DistanceToStepsInput {
        DistanceToStepsInput {
            distance: parse_float_prefix(&self.distance).unwrap_or(0.0),
            unit: self.unit,
            activity: self.activity,
            stride: self.stride.to_stride_input(default_height),
        }
    }
}

/// Stride / steps-per-mile form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrideForm {
    /// Walking or running.
    pub activity: Activity,
    /// Stride fields.
    pub stride: StrideFields,
}

impl StrideForm {
    /// Engine input from the current field values.
    pub fn to_input(&self, default_height: Height) -> StepsPerMileInput {
        StepsPerMileInput {
            activity: self.activity,
            stride: self.stride.to_stride_input(default_height),
        }
    }
}
