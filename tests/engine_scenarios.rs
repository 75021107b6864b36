//! End-to-end checks of the three calculator modes and their narrative text.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use stride::engine::{
    distance_to_steps, reference_table, steps_per_mile, steps_to_distance, DistanceToStepsInput,
    StepsPerMileInput, StepsToDistanceInput,
};
use stride::error::ValidationError;
use stride::narrative::{describe_distance, describe_steps, describe_stride};
use stride::types::{Activity, DistanceUnit, Height, StrideInput, StrideUnit};

fn height(feet: u32, inches: u32) -> StrideInput {
    StrideInput::Height(Height::new(feet, inches))
}

fn custom_inches(value: f64) -> StrideInput {
    StrideInput::Custom { value, unit: StrideUnit::Inches }
}

#[test]
fn ten_thousand_walking_steps_at_five_six() {
    let r = steps_to_distance(&StepsToDistanceInput {
        steps: 10_000,
        activity: Activity::Walking,
        stride: height(5, 6),
    })
    .unwrap();

    assert!((r.stride.get() - 2.2825).abs() < 1e-12);
    assert_eq!(r.miles_display(), "4.32");
    assert_eq!(r.kilometers_display(), "6.96");
    assert_eq!(r.calories, 400);
    assert_eq!(r.time_minutes, 86);
    assert_eq!(r.steps_per_mile, 2313);
    assert_eq!(r.goal_percent, 100);
    assert_eq!(r.remaining_steps, 0);

    let n = describe_steps(&r);
    assert!(n.goal_note.contains("Congratulations"));
    assert!(!n.tips.is_empty());
    assert!(n.interpretation.starts_with("Excellent! Your 10,000 steps covered 4.32 miles"));
}

#[test]
fn ten_k_running_at_six_feet_is_unclamped() {
    let r = distance_to_steps(&DistanceToStepsInput {
        distance: 6.2,
        unit: DistanceUnit::Miles,
        activity: Activity::Running,
        stride: height(6, 0),
    })
    .unwrap();

    // 6.2 * 5280 / 3.12 = 10492.3
    assert_eq!(r.steps, 10_492);
    assert_eq!(r.goal_percent, 105);

    let n = describe_distance(&r);
    assert_eq!(n.goal_note, "This distance exceeds the 10,000-step goal!");
}

#[test]
fn thirty_inch_custom_stride() {
    let r = steps_per_mile(&StepsPerMileInput {
        activity: Activity::Walking,
        stride: custom_inches(30.0),
    })
    .unwrap();

    assert!((r.stride.get() - 2.5).abs() < 1e-12);
    assert_eq!(r.steps_per_mile, 2112);
    assert_eq!(r.steps_per_km, 1312);
    assert!(describe_stride(&r).interpretation.contains("2,112"));
}

#[test]
fn zero_custom_stride_rejected_in_every_mode() {
    let stride = custom_inches(0.0);

    let err = steps_to_distance(&StepsToDistanceInput { steps: 5000, activity: Activity::Walking, stride })
        .unwrap_err();
    assert_eq!(err, ValidationError::MissingCustomStride);

    let err = distance_to_steps(&DistanceToStepsInput {
        distance: 3.1,
        unit: DistanceUnit::Miles,
        activity: Activity::Walking,
        stride,
    })
    .unwrap_err();
    assert_eq!(err, ValidationError::MissingCustomStride);

    let err = steps_per_mile(&StepsPerMileInput { activity: Activity::Running, stride }).unwrap_err();
    assert_eq!(err, ValidationError::MissingCustomStride);
}

#[test]
fn missing_primary_values_are_rejected() {
    let err = steps_to_distance(&StepsToDistanceInput::default()).unwrap_err();
    assert_eq!(err.to_string(), "Please enter the number of steps");

    let err = distance_to_steps(&DistanceToStepsInput::default()).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a distance");
}

#[test]
fn reference_table_covers_five_to_six_four() {
    let table = reference_table();
    assert_eq!(table.len(), 9);
    assert_eq!(table[0].height, Height::new(5, 0));
    assert_eq!(table[8].height, Height::new(6, 4));

    let row = table.iter().find(|r| r.height == Height::new(5, 6)).unwrap();
    assert!((row.walking_stride_inches - 27.4).abs() < 1e-9);
    assert!((row.running_stride_inches - 34.3).abs() < 1e-9);
    assert_eq!(row.walking_steps_per_mile, 2313);
    assert_eq!(row.running_steps_per_mile, 1846);
}

#[test]
fn kilometers_convert_before_stepping() {
    let r = distance_to_steps(&DistanceToStepsInput {
        distance: 5.0,
        unit: DistanceUnit::Kilometers,
        activity: Activity::Walking,
        stride: height(5, 6),
    })
    .unwrap();
    assert_eq!(r.miles_display(), "3.11");
    assert_eq!(r.kilometers_display(), "5.00");
}
