//! Number and duration formatting shared by the narrative and the UI.

use crate::types::StrideFeet;

/// Group digits with commas, en-US style (`12345` → `12,345`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Extra digits inspected when looking for an exact halfway value.
const TIE_DIGITS: usize = 24;

/// Fixed-point rendering with `places` decimals.
///
/// Values exactly halfway between two renderings take the one further from
/// zero (`0.125` → `0.13`), where plain `{:.2}` would pick the even digit.
pub fn to_fixed(x: f64, places: usize) -> String {
    if x.is_finite() && is_exact_tie(x, places) {
        let scale = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
        let rounded = (x * scale).round() / scale;
        return format!("{rounded:.places$}");
    }
    format!("{x:.places$}")
}

fn is_exact_tie(x: f64, places: usize) -> bool {
    let wide = format!("{x:.width$}", width = places + TIE_DIGITS);
    let Some(tail) = wide.get(wide.len().saturating_sub(TIE_DIGITS)..) else {
        return false;
    };
    tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0')
}

/// Human-readable duration: `45 minutes`, `1 hour`, `2 hours`, `1h 26m`.
pub fn format_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} minutes");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (1, 0) => "1 hour".to_string(),
        (h, 0) => format!("{h} hours"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Stride rendered as `27.4 in (69.6 cm)`.
pub fn stride_summary(stride: StrideFeet) -> String {
    format!("{} in ({} cm)", to_fixed(stride.inches(), 1), to_fixed(stride.centimeters(), 1))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(10_485), "10,485");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn to_fixed_rounds_halfway_values_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn to_fixed_leaves_near_ties_alone() {
        // 1.005 is stored just below the halfway point.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(4.3229, 2), "4.32");
        assert_eq!(to_fixed(6.955, 2), "6.96");
        assert_eq!(to_fixed(3.0, 2), "3.00");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_time(0), "0 minutes");
        assert_eq!(format_time(59), "59 minutes");
        assert_eq!(format_time(60), "1 hour");
        assert_eq!(format_time(120), "2 hours");
        assert_eq!(format_time(86), "1h 26m");
    }

    #[test]
    fn stride_summary_uses_one_decimal() {
        let stride = StrideFeet::new(2.5).unwrap();
        assert_eq!(stride_summary(stride), "30.0 in (76.2 cm)");
    }
}
