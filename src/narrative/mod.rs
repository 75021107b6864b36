//! Narrative text for calculator results.
//!
//! Tips, goal notes and interpretation paragraphs are picked from ordered
//! rule ladders (see [`rules`]); the first rung whose threshold holds wins.

pub mod distance;
pub mod rules;
pub mod steps;
pub mod stride;

use serde::Serialize;

use crate::engine::{DistanceToSteps, StepsPerMile, StepsToDistance};

/// A titled suggestion shown under Steps→Distance results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    /// Short heading.
    pub title: String,
    /// One or two sentences of advice.
    pub text: String,
}

impl Tip {
    /// Create a tip.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { title: title.into(), text: text.into() }
    }
}

/// Text generated for a Steps→Distance result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepsNarrative {
    /// Line under the goal gauge.
    pub goal_note: String,
    /// Up to four tips.
    pub tips: Vec<Tip>,
    /// Interpretation paragraph.
    pub interpretation: String,
}

/// Text generated for a Distance→Steps result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceNarrative {
    /// Line under the goal gauge.
    pub goal_note: String,
    /// Interpretation paragraph.
    pub interpretation: String,
}

/// Text generated for a stride result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrideNarrative {
    /// Interpretation paragraph.
    pub interpretation: String,
}

/// Generate all text for a Steps→Distance result.
pub fn describe_steps(r: &StepsToDistance) -> StepsNarrative {
    StepsNarrative {
        goal_note: steps::goal_note(r),
        tips: steps::tips(r),
        interpretation: steps::interpretation(r),
    }
}

/// Generate all text for a Distance→Steps result.
pub fn describe_distance(r: &DistanceToSteps) -> DistanceNarrative {
    DistanceNarrative {
        goal_note: distance::goal_note(r),
        interpretation: distance::interpretation(r),
    }
}

/// Generate all text for a stride result.
pub fn describe_stride(r: &StepsPerMile) -> StrideNarrative {
    StrideNarrative { interpretation: stride::interpretation(r) }
}
