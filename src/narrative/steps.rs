//! Tips, goal note and interpretation for Steps→Distance results.

use super::rules::{always, Ladder, Rule};
use super::Tip;
use crate::constants::goal::DAILY_STEP_GOAL;
use crate::engine::format::{format_time, group_thousands, to_fixed};
use crate::engine::units::round_half_up;
use crate::engine::StepsToDistance;
use crate::types::Activity;

type R = StepsToDistance;

fn steps_text(r: &R) -> String {
    group_thousands(u64::from(r.steps))
}

fn steps_short_of_goal(r: &R) -> String {
    group_thousands(u64::from(DAILY_STEP_GOAL.saturating_sub(r.steps)))
}

fn whole_goal_percent(r: &R) -> f64 {
    round_half_up(r.raw_goal_percent())
}

static GOAL_TIPS: Ladder<R, Tip> = Ladder::new(&[
    Rule {
        when: |r| r.raw_goal_percent() >= 100.0,
        then: |_| {
            Tip::new(
                "Goal Achieved!",
                "Great job hitting 10K steps! Consider increasing your goal to 12,000 or 15,000 for extra benefits.",
            )
        },
    },
    Rule {
        when: |r| r.raw_goal_percent() >= 75.0,
        then: |r| {
            Tip::new(
                "Almost There!",
                format!(
                    "You're {} steps away from your goal. A short walk will get you there!",
                    steps_short_of_goal(r)
                ),
            )
        },
    },
    Rule {
        when: |r| r.raw_goal_percent() >= 50.0,
        then: |r| {
            Tip::new(
                "Halfway There",
                format!(
                    "You've completed {}% of your goal. Keep moving to reach 10,000 steps!",
                    whole_goal_percent(r)
                ),
            )
        },
    },
    Rule {
        when: always,
        then: |_| {
            Tip::new(
                "Keep Moving",
                "Every step counts! Try adding a short walk after meals to boost your daily count.",
            )
        },
    },
]);

static TIME_TIPS: Ladder<R, Tip> = Ladder::new(&[
    Rule {
        when: |r| r.time_minutes >= 60,
        then: |r| {
            Tip::new(
                "Great Workout Duration",
                format!(
                    "You've been active for {}. This exceeds recommended daily activity time!",
                    format_time(r.time_minutes)
                ),
            )
        },
    },
    Rule {
        when: |r| r.time_minutes >= 30,
        then: |r| {
            Tip::new(
                "Meeting Guidelines",
                format!(
                    "Your {} minutes of activity meets CDC recommendations for daily exercise.",
                    r.time_minutes
                ),
            )
        },
    },
    Rule {
        when: always,
        then: |_| {
            Tip::new(
                "Build Up Gradually",
                "Aim for 30 minutes of activity daily. Try adding a 10-minute walk to your routine.",
            )
        },
    },
]);

static CALORIE_TIPS: Ladder<R, Tip> = Ladder::new(&[
    Rule {
        when: |r| r.calories >= 300,
        then: |r| {
            Tip::new(
                "Solid Calorie Burn",
                format!(
                    "You've burned approximately {} calories\u{2014}equivalent to a small meal!",
                    r.calories
                ),
            )
        },
    },
    Rule {
        when: always,
        then: |r| {
            Tip::new(
                "Calorie Insight",
                format!(
                    "At {} cal, consider adding more steps if weight management is your goal.",
                    r.calories
                ),
            )
        },
    },
]);

static DISTANCE_TIPS: Ladder<R, Tip> = Ladder::new(&[
    Rule {
        when: |r| r.display_miles() >= 5.0,
        then: |r| {
            Tip::new(
                "5+ Miles!",
                format!(
                    "You've covered {} miles\u{2014}that's significant distance. Great for cardiovascular health!",
                    r.miles_display()
                ),
            )
        },
    },
    Rule {
        when: |r| r.display_miles() >= 3.0,
        then: |r| {
            Tip::new(
                "Solid Distance",
                format!(
                    "At {} miles, you're getting meaningful cardiovascular benefits.",
                    r.miles_display()
                ),
            )
        },
    },
    Rule {
        when: always,
        then: |r| {
            Tip::new(
                "Every Mile Matters",
                format!(
                    "Your {} miles contribute to better health. Consistency is key!",
                    r.miles_display()
                ),
            )
        },
    },
]);

static GOAL_CLAUSE: Ladder<R, String> = Ladder::new(&[
    Rule {
        when: |r| r.raw_goal_percent() >= 100.0,
        then: |r| {
            format!(
                "Excellent! Your {} steps covered {} miles ({} km)\u{2014}that's above the popular 10,000-step daily goal. ",
                steps_text(r),
                r.miles_display(),
                r.kilometers_display()
            )
        },
    },
    Rule {
        when: always,
        then: |r| {
            format!(
                "Your {} steps covered {} miles ({} km), which is {}% of the 10,000-step daily target. ",
                steps_text(r),
                r.miles_display(),
                r.kilometers_display(),
                whole_goal_percent(r)
            )
        },
    },
]);

static DISTANCE_CLAUSE: Ladder<R, String> = Ladder::new(&[
    Rule {
        when: |r| r.display_miles() >= 4.0,
        then: |r| {
            format!(
                "This is equivalent to walking to a destination about {} miles away and back. ",
                to_fixed(r.display_miles() / 2.0, 1)
            )
        },
    },
    Rule {
        when: |r| r.display_miles() >= 2.0,
        then: |_| "This is roughly the distance of walking around a typical neighborhood block 8-10 times. ".to_string(),
    },
    Rule {
        when: always,
        then: |_| {
            "This is about the distance you might cover during light daily activities like shopping or household tasks. "
                .to_string()
        },
    },
]);

static ACTIVITY_CLAUSE: Ladder<R, String> = Ladder::new(&[
    Rule {
        when: |r| r.activity == Activity::Running,
        then: |_| {
            "Since you were running, you covered more ground per step than walking would, with higher calorie expenditure."
                .to_string()
        },
    },
    Rule {
        when: always,
        then: |_| {
            "Walking at a moderate pace provides cardiovascular benefits while being gentle on your joints.".to_string()
        },
    },
]);

/// Goal, time, calorie and distance tips, in that order.
pub fn tips(r: &StepsToDistance) -> Vec<Tip> {
    [&GOAL_TIPS, &TIME_TIPS, &CALORIE_TIPS, &DISTANCE_TIPS]
        .iter()
        .filter_map(|ladder| ladder.select(r))
        .collect()
}

/// Progress line under the goal gauge.
pub fn goal_note(r: &StepsToDistance) -> String {
    if r.goal_reached() {
        "\u{1F389} Congratulations! You've reached your 10,000 step goal!".to_string()
    } else {
        format!(
            "{} steps to go (\u{2248} {} miles)",
            group_thousands(u64::from(r.remaining_steps)),
            to_fixed(r.remaining_miles, 1)
        )
    }
}

/// Narrative paragraph: goal context, distance context, activity context.
pub fn interpretation(r: &StepsToDistance) -> String {
    [&GOAL_CLAUSE, &DISTANCE_CLAUSE, &ACTIVITY_CLAUSE]
        .iter()
        .filter_map(|ladder| ladder.select(r))
        .collect()
}
