//! Stride / steps-per-mile mode and the height reference table.

use serde::{Deserialize, Serialize};

use super::format::to_fixed;
use super::stride::{resolve_stride, stride_from_height};
use super::units::{round_to, steps_per_km, steps_per_mile as per_mile};
use crate::constants::reference::HEIGHTS;
use crate::error::ValidationError;
use crate::types::{Activity, Height, StrideFeet, StrideInput, StrideMethod};

/// Inputs for the stride calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepsPerMileInput {
    /// Walking or running.
    pub activity: Activity,
    /// Height or measured stride.
    pub stride: StrideInput,
}

/// One height band of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceTableRow {
    /// Height for this row.
    pub height: Height,
    /// Walking stride in inches, one decimal.
    pub walking_stride_inches: f64,
    /// Running stride in inches, one decimal.
    pub running_stride_inches: f64,
    /// Walking steps per mile.
    pub walking_steps_per_mile: u32,
    /// Running steps per mile.
    pub running_steps_per_mile: u32,
}

impl ReferenceTableRow {
    fn for_height(height: Height) -> Option<Self> {
        let walking = stride_from_height(Activity::Walking, height)?;
        let running = stride_from_height(Activity::Running, height)?;
        Some(Self {
            height,
            walking_stride_inches: round_to(walking.inches(), 1),
            running_stride_inches: round_to(running.inches(), 1),
            walking_steps_per_mile: per_mile(walking),
            running_steps_per_mile: per_mile(running),
        })
    }

    /// Strides rendered as `27.4" / 34.3"`.
    pub fn stride_display(&self) -> String {
        format!(
            "{}\" / {}\"",
            to_fixed(self.walking_stride_inches, 1),
            to_fixed(self.running_stride_inches, 1)
        )
    }
}

/// Steps per mile and kilometer for a stride, plus the reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepsPerMile {
    /// Activity used for the stride estimate.
    pub activity: Activity,
    /// Stride input as supplied.
    pub stride_input: StrideInput,
    /// Resolved stride length.
    pub stride: StrideFeet,
    /// Steps per mile.
    pub steps_per_mile: u32,
    /// Steps per kilometer.
    pub steps_per_km: u32,
    /// Walking and running figures for common heights.
    pub reference_table: Vec<ReferenceTableRow>,
}

impl StepsPerMile {
    /// Where the stride came from.
    pub const fn stride_source(&self) -> &'static str {
        match self.stride_input.method() {
            StrideMethod::Height => "Height-based estimate",
            StrideMethod::Custom => "Custom stride",
        }
    }

    /// Height as shown in the summary, or "Custom stride".
    pub fn height_display(&self) -> String {
        self.stride_input
            .height()
            .map_or_else(|| "Custom stride".to_string(), |h| h.to_string())
    }
}

/// Walking and running stride and steps-per-mile for heights 5'0" to 6'4".
///
/// Independent of any user input; both activities are always included.
pub fn reference_table() -> Vec<ReferenceTableRow> {
    HEIGHTS
        .iter()
        .filter_map(|&(feet, inches)| ReferenceTableRow::for_height(Height::new(feet, inches)))
        .collect()
}

/// Compute steps per mile and per kilometer for a stride.
pub fn steps_per_mile(input: &StepsPerMileInput) -> Result<StepsPerMile, ValidationError> {
    let stride = resolve_stride(input.activity, &input.stride)?;
    let spm = per_mile(stride);

    Ok(StepsPerMile {
        activity: input.activity,
        stride_input: input.stride,
        stride,
        steps_per_mile: spm,
        steps_per_km: steps_per_km(spm),
        reference_table: reference_table(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::StrideUnit;

    #[test]
    fn custom_thirty_inch_stride() {
        let input = StepsPerMileInput {
            activity: Activity::Walking,
            stride: StrideInput::Custom { value: 30.0, unit: StrideUnit::Inches },
        };
        let r = steps_per_mile(&input).unwrap();
        assert!((r.stride.get() - 2.5).abs() < 1e-12);
        assert_eq!(r.steps_per_mile, 2112);
        assert_eq!(r.steps_per_km, 1312);
        assert_eq!(r.stride_source(), "Custom stride");
        assert_eq!(r.height_display(), "Custom stride");
    }

    #[test]
    fn height_based_summary() {
        let r = steps_per_mile(&StepsPerMileInput::default()).unwrap();
        assert_eq!(r.steps_per_mile, 2313);
        assert_eq!(r.stride_source(), "Height-based estimate");
        assert_eq!(r.height_display(), "5'6\"");
    }

    #[test]
    fn reference_table_has_nine_rows() {
        let table = reference_table();
        assert_eq!(table.len(), 9);
        assert_eq!(table[0].height, Height::new(5, 0));
        assert_eq!(table[8].height, Height::new(6, 4));
    }

    #[test]
    fn reference_row_for_five_six() {
        let row = reference_table()
            .into_iter()
            .find(|r| r.height == Height::new(5, 6))
            .unwrap();
        assert_eq!(row.stride_display(), "27.4\" / 34.3\"");
        assert_eq!(row.walking_steps_per_mile, 2313);
        assert_eq!(row.running_steps_per_mile, 1846);
    }

    #[test]
    fn reference_table_ignores_selected_activity() {
        let walking = steps_per_mile(&StepsPerMileInput { activity: Activity::Walking, ..Default::default() })
            .unwrap();
        let running = steps_per_mile(&StepsPerMileInput { activity: Activity::Running, ..Default::default() })
            .unwrap();
        assert_eq!(walking.reference_table, running.reference_table);
    }

    #[test]
    fn zero_custom_stride_rejected() {
        let input = StepsPerMileInput {
            activity: Activity::Running,
            stride: StrideInput::Custom { value: 0.0, unit: StrideUnit::Inches },
        };
        assert_eq!(steps_per_mile(&input), Err(ValidationError::MissingCustomStride));
    }
}
