//! Distance→Steps mode.

use serde::{Deserialize, Serialize};

use super::format::to_fixed;
use super::stride::resolve_stride;
use super::units::{
    kilometers_from_miles, miles_from_kilometers, round_count, steps_per_km, steps_per_mile,
};
use crate::constants::goal::DAILY_STEP_GOAL;
use crate::constants::units::FEET_PER_MILE;
use crate::error::ValidationError;
use crate::types::{Activity, DistanceUnit, StrideFeet, StrideInput};

/// Inputs for converting a distance into a step count.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistanceToStepsInput {
    /// Distance in `unit`. Must be greater than zero.
    pub distance: f64,
    /// Unit of `distance`.
    pub unit: DistanceUnit,
    /// Walking or running.
    pub activity: Activity,
    /// Height or measured stride.
    pub stride: StrideInput,
}

/// Steps needed to cover a distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceToSteps {
    /// Distance as entered.
    pub distance: f64,
    /// Unit the distance was entered in.
    pub unit: DistanceUnit,
    /// Activity used for the stride estimate.
    pub activity: Activity,
    /// Stride input as supplied.
    pub stride_input: StrideInput,
    /// Resolved stride length.
    pub stride: StrideFeet,
    /// Distance normalized to miles.
    pub miles: f64,
    /// Distance in kilometers.
    pub kilometers: f64,
    /// Steps needed.
    pub steps: u32,
    /// Steps per mile at this stride.
    pub steps_per_mile: u32,
    /// Steps per kilometer at this stride.
    pub steps_per_km: u32,
    /// Share of the daily goal these steps represent. Not clamped.
    pub goal_percent: u32,
}

impl DistanceToSteps {
    /// Miles with two decimals, as displayed.
    pub fn miles_display(&self) -> String {
        to_fixed(self.miles, 2)
    }

    /// Kilometers with two decimals, as displayed.
    pub fn kilometers_display(&self) -> String {
        to_fixed(self.kilometers, 2)
    }

    /// Miles read back from [`miles_display`](Self::miles_display).
    /// Narrative thresholds use this so they agree with the shown figure.
    pub fn display_miles(&self) -> f64 {
        self.miles_display().parse().unwrap_or(self.miles)
    }

    /// Stride shown in the summary, back-derived from the rounded steps-per-mile.
    pub fn summary_stride(&self) -> StrideFeet {
        if self.steps_per_mile == 0 {
            return self.stride;
        }
        StrideFeet::new(FEET_PER_MILE / f64::from(self.steps_per_mile)).unwrap_or(self.stride)
    }
}

/// Convert a distance into the steps needed to cover it.
///
/// Goal progress is not clamped here, unlike
/// [`steps_to_distance`](super::steps_to_distance), so long distances report
/// how far past the daily goal they go.
pub fn distance_to_steps(input: &DistanceToStepsInput) -> Result<DistanceToSteps, ValidationError> {
    if !input.distance.is_finite() || input.distance <= 0.0 {
        return Err(ValidationError::MissingDistance);
    }
    let miles = match input.unit {
        DistanceUnit::Miles => input.distance,
        DistanceUnit::Kilometers => miles_from_kilometers(input.distance),
    };
    let stride = resolve_stride(input.activity, &input.stride)?;

    let steps = round_count(miles * FEET_PER_MILE / stride.get());
    let per_mile = steps_per_mile(stride);
    let goal_percent = round_count(f64::from(steps) / f64::from(DAILY_STEP_GOAL) * 100.0);

    Ok(DistanceToSteps {
        distance: input.distance,
        unit: input.unit,
        activity: input.activity,
        stride_input: input.stride,
        stride,
        miles,
        kilometers: kilometers_from_miles(miles),
        steps,
        steps_per_mile: per_mile,
        steps_per_km: steps_per_km(per_mile),
        goal_percent,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::{Height, StrideUnit};

    #[test]
    fn ten_k_running_exceeds_goal_unclamped() {
        let input = DistanceToStepsInput {
            distance: 6.2,
            unit: DistanceUnit::Miles,
            activity: Activity::Running,
            stride: StrideInput::Height(Height::new(6, 0)),
        };
        let r = distance_to_steps(&input).unwrap();
        assert!((r.stride.get() - 3.12).abs() < 1e-9);
        assert_eq!(r.steps, 10_492);
        assert_eq!(r.goal_percent, 105);
        assert_eq!(r.steps_per_mile, 1692);
    }

    #[test]
    fn marathon_goal_percent_well_past_hundred() {
        let input = DistanceToStepsInput {
            distance: 26.2,
            unit: DistanceUnit::Miles,
            activity: Activity::Walking,
            stride: StrideInput::default(),
        };
        let r = distance_to_steps(&input).unwrap();
        assert!(r.goal_percent > 500);
    }

    #[test]
    fn kilometers_are_normalized() {
        let input = DistanceToStepsInput {
            distance: 1.60934,
            unit: DistanceUnit::Kilometers,
            activity: Activity::Walking,
            stride: StrideInput::Custom { value: 30.0, unit: StrideUnit::Inches },
        };
        let r = distance_to_steps(&input).unwrap();
        assert_eq!(r.miles_display(), "1.00");
        assert_eq!(r.steps, 2112);
        assert_eq!(r.steps_per_km, 1312);
    }

    #[test]
    fn display_miles_follows_rounded_text() {
        let input = DistanceToStepsInput {
            distance: 0.125,
            unit: DistanceUnit::Miles,
            activity: Activity::Walking,
            stride: StrideInput::Custom { value: 12.0, unit: StrideUnit::Inches },
        };
        let r = distance_to_steps(&input).unwrap();
        assert_eq!(r.miles_display(), "0.13");
        assert!((r.display_miles() - 0.13).abs() < 1e-12);
        assert_eq!(r.steps, 660);
    }

    #[test]
    fn summary_stride_comes_from_rounded_steps_per_mile() {
        let input = DistanceToStepsInput {
            distance: 1.0,
            unit: DistanceUnit::Miles,
            activity: Activity::Walking,
            stride: StrideInput::Height(Height::new(5, 6)),
        };
        let r = distance_to_steps(&input).unwrap();
        let shown = r.summary_stride().get();
        assert!((shown - 5280.0 / 2313.0).abs() < 1e-12);
        assert!((shown - r.stride.get()).abs() < 0.001);
    }

    #[test]
    fn missing_distance_rejected() {
        for distance in [0.0, -3.0, f64::NAN] {
            let input = DistanceToStepsInput { distance, ..DistanceToStepsInput::default() };
            assert_eq!(distance_to_steps(&input), Err(ValidationError::MissingDistance));
        }
    }

    #[test]
    fn zero_custom_stride_rejected() {
        let input = DistanceToStepsInput {
            distance: 3.1,
            stride: StrideInput::Custom { value: 0.0, unit: StrideUnit::Centimeters },
            ..DistanceToStepsInput::default()
        };
        assert_eq!(distance_to_steps(&input), Err(ValidationError::MissingCustomStride));
    }
}
