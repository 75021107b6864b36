//! Stride resolution.
//!
//! A stride is either estimated from height (scaled by the activity's stride
//! percentage) or taken from a measured value in inches or centimeters.

use super::units::{feet_from_centimeters, feet_from_inches};
use crate::error::ValidationError;
use crate::types::{Activity, Height, StrideFeet, StrideInput, StrideUnit};

/// Resolve the stride length in feet for an activity.
///
/// A custom stride that is missing, zero or negative is reported as
/// [`ValidationError::MissingCustomStride`]. A height that yields no positive
/// stride is reported as [`ValidationError::NonPositiveStride`].
pub fn resolve_stride(activity: Activity, input: &StrideInput) -> Result<StrideFeet, ValidationError> {
    match *input {
        StrideInput::Height(height) => {
            stride_from_height(activity, height).ok_or(ValidationError::NonPositiveStride)
        }
        StrideInput::Custom { value, unit } => {
            if value.is_nan() || value <= 0.0 {
                return Err(ValidationError::MissingCustomStride);
            }
            let feet = match unit {
                StrideUnit::Inches => feet_from_inches(value),
                StrideUnit::Centimeters => feet_from_centimeters(value),
            };
            StrideFeet::new(feet).ok_or(ValidationError::MissingCustomStride)
        }
    }
}

/// Height-based stride estimate, `None` for a zero height.
pub fn stride_from_height(activity: Activity, height: Height) -> Option<StrideFeet> {
    StrideFeet::new(height.total_feet() * activity.profile().stride_percent)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn walking_stride_from_default_height() {
        let stride = resolve_stride(Activity::Walking, &StrideInput::Height(Height::new(5, 6))).unwrap();
        assert!((stride.get() - 2.2825).abs() < 1e-9);
    }

    #[test]
    fn running_stride_from_six_feet() {
        let stride = resolve_stride(Activity::Running, &StrideInput::Height(Height::new(6, 0))).unwrap();
        assert!((stride.get() - 3.12).abs() < 1e-9);
    }

    #[test]
    fn custom_stride_ignores_activity() {
        let input = StrideInput::Custom { value: 30.0, unit: StrideUnit::Inches };
        let walking = resolve_stride(Activity::Walking, &input).unwrap();
        let running = resolve_stride(Activity::Running, &input).unwrap();
        assert_eq!(walking, running);
        assert!((walking.get() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn custom_stride_in_centimeters() {
        let input = StrideInput::Custom { value: 76.2, unit: StrideUnit::Centimeters };
        let stride = resolve_stride(Activity::Walking, &input).unwrap();
        assert!((stride.get() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn non_positive_custom_stride_is_rejected() {
        for value in [0.0, -12.0, f64::NAN] {
            let input = StrideInput::Custom { value, unit: StrideUnit::Inches };
            assert_eq!(
                resolve_stride(Activity::Walking, &input),
                Err(ValidationError::MissingCustomStride)
            );
        }
    }

    #[test]
    fn zero_height_is_rejected() {
        let input = StrideInput::Height(Height::new(0, 0));
        assert_eq!(
            resolve_stride(Activity::Running, &input),
            Err(ValidationError::NonPositiveStride)
        );
    }
}
