//! Steps→Distance mode.

use serde::{Deserialize, Serialize};

use super::format::to_fixed;
use super::stride::resolve_stride;
use super::units::{kilometers_from_miles, miles_from_feet, round_count, steps_per_mile};
use crate::constants::goal::DAILY_STEP_GOAL;
use crate::error::ValidationError;
use crate::types::{Activity, StrideFeet, StrideInput};

/// Inputs for converting a step count into distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepsToDistanceInput {
    /// Number of steps taken. Must be greater than zero.
    pub steps: u32,
    /// Walking or running.
    pub activity: Activity,
    /// Height or measured stride.
    pub stride: StrideInput,
}

/// Distance, effort and goal progress for a step count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepsToDistance {
    /// Step count the result was computed for.
    pub steps: u32,
    /// Activity used for stride, calories and pace.
    pub activity: Activity,
    /// Stride input as supplied.
    pub stride_input: StrideInput,
    /// Resolved stride length.
    pub stride: StrideFeet,
    /// Distance covered in miles.
    pub miles: f64,
    /// Distance covered in kilometers.
    pub kilometers: f64,
    /// Rough calorie estimate.
    pub calories: u32,
    /// Estimated elapsed time at the activity's average pace.
    pub time_minutes: u32,
    /// Steps per mile at this stride.
    pub steps_per_mile: u32,
    /// Progress toward the daily goal, clamped to 100.
    pub goal_percent: u32,
    /// Steps left until the daily goal, zero once reached.
    pub remaining_steps: u32,
    /// Distance those remaining steps cover, in miles.
    pub remaining_miles: f64,
}

impl StepsToDistance {
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

    /// Unclamped progress toward the daily goal, in percent.
    pub fn raw_goal_percent(&self) -> f64 {
        f64::from(self.steps) / f64::from(DAILY_STEP_GOAL) * 100.0
    }

    /// Whether the step count meets the daily goal.
    pub const fn goal_reached(&self) -> bool {
        self.steps >= DAILY_STEP_GOAL
    }
}

/// Convert a step count into distance, calories, time and goal progress.
pub fn steps_to_distance(input: &StepsToDistanceInput) -> Result<StepsToDistance, ValidationError> {
    if input.steps == 0 {
        return Err(ValidationError::MissingStepCount);
    }
    let stride = resolve_stride(input.activity, &input.stride)?;
    let profile = input.activity.profile();
    let steps = f64::from(input.steps);

    let miles = miles_from_feet(steps * stride.get());
    let kilometers = kilometers_from_miles(miles);
    let calories = round_count(steps * profile.calories_per_step);
    let time_minutes = round_count(miles / profile.avg_speed_mph * 60.0);

    let goal_percent = round_count(steps / f64::from(DAILY_STEP_GOAL) * 100.0).min(100);
    let remaining_steps = DAILY_STEP_GOAL.saturating_sub(input.steps);
    let remaining_miles = miles_from_feet(f64::from(remaining_steps) * stride.get());

    Ok(StepsToDistance {
        steps: input.steps,
        activity: input.activity,
        stride_input: input.stride,
        stride,
        miles,
        kilometers,
        calories,
        time_minutes,
        steps_per_mile: steps_per_mile(stride),
        goal_percent,
        remaining_steps,
        remaining_miles,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::{Height, StrideUnit};

    fn walking(steps: u32) -> StepsToDistanceInput {
        StepsToDistanceInput {
            steps,
            activity: Activity::Walking,
            stride: StrideInput::Height(Height::new(5, 6)),
        }
    }

    #[test]
    fn ten_thousand_walking_steps() {
        let r = steps_to_distance(&walking(10_000)).unwrap();
        assert_eq!(r.miles_display(), "4.32");
        assert_eq!(r.kilometers_display(), "6.96");
        assert_eq!(r.calories, 400);
        assert_eq!(r.steps_per_mile, 2313);
        assert_eq!(r.time_minutes, 86);
        assert_eq!(r.goal_percent, 100);
        assert_eq!(r.remaining_steps, 0);
        assert!(r.goal_reached());
    }

    #[test]
    fn display_miles_matches_shown_figure() {
        // 960 steps at 5'6" is 0.41499... miles.
        let r = steps_to_distance(&walking(960)).unwrap();
        assert_eq!(r.miles_display(), "0.41");
        assert!((r.display_miles() - 0.41).abs() < 1e-12);

        let input = StepsToDistanceInput {
            steps: 6_160,
            activity: Activity::Walking,
            stride: StrideInput::Height(Height::new(6, 0)),
        };
        let r = steps_to_distance(&input).unwrap();
        assert_eq!(r.miles_display(), "2.90");
        assert!((r.display_miles() - 2.90).abs() < 1e-12);
    }

    #[test]
    fn halfway_miles_round_up() {
        let input = StepsToDistanceInput {
            steps: 660,
            activity: Activity::Walking,
            stride: StrideInput::Custom { value: 12.0, unit: StrideUnit::Inches },
        };
        let r = steps_to_distance(&input).unwrap();
        assert_eq!(r.miles_display(), "0.13");
        assert!((r.display_miles() - 0.13).abs() < 1e-12);
    }

    #[test]
    fn goal_percent_is_clamped() {
        let r = steps_to_distance(&walking(25_000)).unwrap();
        assert_eq!(r.goal_percent, 100);
        assert!(r.raw_goal_percent() > 200.0);
        assert_eq!(r.remaining_steps, 0);
        assert!(r.remaining_miles.abs() < f64::EPSILON);
    }

    #[test]
    fn remaining_steps_below_goal() {
        let r = steps_to_distance(&walking(7_500)).unwrap();
        assert_eq!(r.goal_percent, 75);
        assert_eq!(r.remaining_steps, 2_500);
        assert_eq!(to_fixed(r.remaining_miles, 1), "1.1");
    }

    #[test]
    fn running_uses_running_profile() {
        let input = StepsToDistanceInput {
            steps: 10_000,
            activity: Activity::Running,
            stride: StrideInput::Height(Height::new(5, 6)),
        };
        let r = steps_to_distance(&input).unwrap();
        assert_eq!(r.calories, 600);
        assert!((r.stride.get() - 2.86).abs() < 1e-9);
    }

    #[test]
    fn zero_steps_rejected_before_stride() {
        let input = StepsToDistanceInput {
            steps: 0,
            activity: Activity::Walking,
            stride: StrideInput::Custom { value: 0.0, unit: StrideUnit::Inches },
        };
        assert_eq!(steps_to_distance(&input), Err(ValidationError::MissingStepCount));
    }

    #[test]
    fn zero_custom_stride_rejected() {
        let input = StepsToDistanceInput {
            steps: 5_000,
            activity: Activity::Walking,
            stride: StrideInput::Custom { value: 0.0, unit: StrideUnit::Inches },
        };
        assert_eq!(steps_to_distance(&input), Err(ValidationError::MissingCustomStride));
    }
}
