//! Application constants.
//!
//! Centralizes conversion factors, activity profiles and UI tuning values.

/// Fixed length conversion factors.
pub mod units {
    /// Feet in one statute mile.
    pub const FEET_PER_MILE: f64 = 5280.0;

    /// Meters in one kilometer.
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Kilometers in one statute mile.
    pub const KM_PER_MILE: f64 = 1.60934;

    /// Inches in one foot.
    pub const INCHES_PER_FOOT: f64 = 12.0;

    /// Centimeters in one foot.
    pub const CM_PER_FOOT: f64 = 30.48;
}

/// Daily step goal used for progress and narrative text.
pub mod goal {
    /// The popular 10,000-step daily target.
    pub const DAILY_STEP_GOAL: u32 = 10_000;
}

/// Per-activity stride, calorie and pace estimates.
pub mod activity {
    /// Fixed estimates for one activity.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ActivityProfile {
        /// Stride length as a fraction of body height.
        pub stride_percent: f64,
        /// Population average steps per mile, used for comparisons.
        pub avg_steps_per_mile: u32,
        /// Rough calories burned per step.
        pub calories_per_step: f64,
        /// Average pace in miles per hour, used for time estimates.
        pub avg_speed_mph: f64,
    }

    /// Walking profile.
    pub const WALKING: ActivityProfile = ActivityProfile {
        stride_percent: 0.415,
        avg_steps_per_mile: 2100,
        calories_per_step: 0.04,
        avg_speed_mph: 3.0,
    };

    /// Running profile.
    pub const RUNNING: ActivityProfile = ActivityProfile {
        stride_percent: 0.52,
        avg_steps_per_mile: 1600,
        calories_per_step: 0.06,
        avg_speed_mph: 6.0,
    };
}

/// Fallback form values.
pub mod defaults {
    /// Default height, whole feet.
    pub const HEIGHT_FEET: u32 = 5;

    /// Default height, remaining inches.
    pub const HEIGHT_INCHES: u32 = 6;

    /// Default log filter directive.
    pub const LOG_FILTER: &str = "info";

    /// Log file name inside the log directory.
    pub const LOG_FILE_NAME: &str = "stride.log";
}

/// Steps-per-mile reference table.
pub mod reference {
    /// Heights (feet, inches) listed in the reference table, 5'0" to 6'4".
    pub const HEIGHTS: [(u32, u32); 9] = [
        (5, 0),
        (5, 2),
        (5, 4),
        (5, 6),
        (5, 8),
        (5, 10),
        (6, 0),
        (6, 2),
        (6, 4),
    ];
}

/// Quick-fill values offered on the calculator tabs.
pub mod presets {
    /// Step count presets.
    pub const STEPS: [&str; 4] = ["5000", "7500", "10000", "15000"];

    /// Distance presets in the selected unit (1 mile, 5K, 10K, half marathon).
    pub const DISTANCES: [&str; 4] = ["1", "3.1", "6.2", "13.1"];
}

/// Event loop timing.
pub mod event_loop {
    /// How long to wait for a terminal event before redrawing.
    pub const POLL_INTERVAL_MS: u64 = 50;

    /// Idle sleep between polls.
    pub const IDLE_SLEEP_MS: u64 = 5;
}

/// UI layout constants.
pub mod ui {
    /// Width of the input form pane as a percentage.
    pub const FORM_PANE_PERCENT: u16 = 40;

    /// Maximum characters accepted in a numeric text field.
    pub const MAX_FIELD_LEN: usize = 12;
}
