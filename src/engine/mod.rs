//! Conversion engine.
//!
//! Pure arithmetic for the three calculator modes. Every entry point takes a
//! plain input record and returns a fresh result record, or the
//! [`ValidationError`](crate::error::ValidationError) that stopped it. Nothing
//! here performs I/O or logs.

pub mod distance_to_steps;
pub mod format;
pub mod steps_per_mile;
pub mod steps_to_distance;
pub mod stride;
pub mod units;

pub use distance_to_steps::{distance_to_steps, DistanceToSteps, DistanceToStepsInput};
pub use steps_per_mile::{reference_table, steps_per_mile, ReferenceTableRow, StepsPerMile, StepsPerMileInput};
pub use steps_to_distance::{steps_to_distance, StepsToDistance, StepsToDistanceInput};
pub use stride::resolve_stride;
