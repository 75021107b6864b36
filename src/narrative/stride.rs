//! Interpretation for stride / steps-per-mile results.

use super::rules::{always, Ladder, Rule};
use crate::constants::goal::DAILY_STEP_GOAL;
use crate::engine::format::{group_thousands, to_fixed};
use crate::engine::units::round_half_up;
use crate::engine::StepsPerMile;

/// Steps-per-mile compared against the activity's population average.
struct Comparison {
    average: u32,
    diff: i64,
    diff_percent: f64,
}

impl Comparison {
    fn of(r: &StepsPerMile) -> Self {
        let average = r.activity.profile().avg_steps_per_mile;
        let diff = i64::from(r.steps_per_mile) - i64::from(average);
        #[allow(clippy::cast_precision_loss)]
        let diff_percent = round_half_up(diff as f64 / f64::from(average) * 100.0).abs();
        Self { average, diff, diff_percent }
    }

    fn average_text(&self) -> String {
        group_thousands(u64::from(self.average))
    }
}

static COMPARISON_CLAUSE: Ladder<Comparison, String> = Ladder::new(&[
    Rule {
        when: |c| c.diff.abs() < 100,
        then: |c| {
            format!(
                "This is very close to the population average of {} steps per mile. ",
                c.average_text()
            )
        },
    },
    Rule {
        when: |c| c.diff > 0,
        then: |c| {
            format!(
                "This is {}% more than the average of {} (shorter stride). ",
                c.diff_percent,
                c.average_text()
            )
        },
    },
    Rule {
        when: always,
        then: |c| {
            format!(
                "This is {}% fewer than the average of {} (longer stride). ",
                c.diff_percent,
                c.average_text()
            )
        },
    },
]);

/// Narrative paragraph: steps per mile, comparison to average, distance for 10K steps.
///
/// The closing sentence takes the activity's bare verb ("walk" or "run"),
/// not the "walking"/"running" key used in the lead sentence. This is the
/// one place the wording is not reproduced word for word.
pub fn interpretation(r: &StepsPerMile) -> String {
    let mut text = format!(
        "Based on your {}, you take approximately {} steps per mile ({} per km). ",
        r.activity.key(),
        group_thousands(u64::from(r.steps_per_mile)),
        group_thousands(u64::from(r.steps_per_km))
    );
    if let Some(clause) = COMPARISON_CLAUSE.select(&Comparison::of(r)) {
        text.push_str(&clause);
    }
    let goal_miles = if r.steps_per_mile == 0 {
        0.0
    } else {
        f64::from(DAILY_STEP_GOAL) / f64::from(r.steps_per_mile)
    };
    text.push_str(&format!(
        "To reach 10,000 steps, you'd need to {} about {} miles.",
        r.activity.verb(),
        to_fixed(goal_miles, 1)
    ));
    text
}
