//! Goal note and interpretation for Distance→Steps results.

use super::rules::{always, Ladder, Rule};
use crate::engine::format::group_thousands;
use crate::engine::DistanceToSteps;

type R = DistanceToSteps;

static RACE_CLAUSE: Ladder<R, &'static str> = Ladder::new(&[
    Rule {
        when: |r| r.display_miles() >= 13.1,
        then: |_| "This is half-marathon distance\u{2014}a significant athletic achievement! ",
    },
    Rule {
        when: |r| r.display_miles() >= 6.2,
        then: |_| "This is 10K race distance, a popular fitness milestone. ",
    },
    Rule {
        when: |r| r.display_miles() >= 3.1,
        then: |_| "This is about 5K distance, a great workout distance. ",
    },
    Rule {
        when: |r| r.display_miles() >= 2.0,
        then: |_| "This is a solid walking workout distance. ",
    },
    Rule {
        when: always,
        then: |_| "This is a comfortable walking distance for most people. ",
    },
]);

static GOAL_CLAUSE: Ladder<R, String> = Ladder::new(&[
    Rule {
        when: |r| r.goal_percent >= 100,
        then: |_| "Walking this distance alone would exceed your daily 10,000-step goal!".to_string(),
    },
    Rule {
        when: |r| r.goal_percent >= 50,
        then: |r| format!("This would get you {}% toward the daily 10K step goal.", r.goal_percent),
    },
    Rule {
        when: always,
        then: |_| "You'll need additional walking to reach the 10,000-step goal.".to_string(),
    },
]);

/// Progress line under the goal gauge.
pub fn goal_note(r: &DistanceToSteps) -> String {
    if r.goal_percent >= 100 {
        "This distance exceeds the 10,000-step goal!".to_string()
    } else {
        format!("This distance is {}% of the daily 10K goal", r.goal_percent)
    }
}

/// Narrative paragraph: step count, race-distance context, goal context.
pub fn interpretation(r: &DistanceToSteps) -> String {
    let mut text = format!(
        "To cover {} miles ({} km), you'll need approximately {} steps. ",
        r.miles_display(),
        r.kilometers_display(),
        group_thousands(u64::from(r.steps))
    );
    if let Some(clause) = RACE_CLAUSE.select(r) {
        text.push_str(clause);
    }
    if let Some(clause) = GOAL_CLAUSE.select(r) {
        text.push_str(&clause);
    }
    text
}
