//! Efficiency score models.
//!
//! This module defines the [`Grade`] letter scale, the [`ScoreBreakdownItem`]
//! entries that explain a score, and the [`EfficiencyScore`] produced by the
//! scorer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grade derived from an efficiency score.
///
/// Serialized as the letter itself (e.g. `"A+"`, `"C-"`).
///
/// # Example
///
/// ```
/// use meeting_cost_engine::models::Grade;
///
/// assert_eq!(Grade::from_score(95), Grade::APlus);
/// assert_eq!(Grade::from_score(94), Grade::A);
/// assert_eq!(Grade::from_score(44), Grade::F);
/// assert_eq!(Grade::from_score(60).to_string(), "C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 95 and above.
    #[serde(rename = "A+")]
    APlus,
    /// 90 to 94.
    #[serde(rename = "A")]
    A,
    /// 85 to 89.
    #[serde(rename = "A-")]
    AMinus,
    /// 80 to 84.
    #[serde(rename = "B+")]
    BPlus,
    /// 75 to 79.
    #[serde(rename = "B")]
    B,
    /// 70 to 74.
    #[serde(rename = "B-")]
    BMinus,
    /// 65 to 69.
    #[serde(rename = "C+")]
    CPlus,
    /// 60 to 64.
    #[serde(rename = "C")]
    C,
    /// 55 to 59.
    #[serde(rename = "C-")]
    CMinus,
    /// 50 to 54.
    #[serde(rename = "D+")]
    DPlus,
    /// 45 to 49.
    #[serde(rename = "D")]
    D,
    /// Below 45.
    #[serde(rename = "F")]
    F,
}

/// Inclusive lower bounds, highest first.
const GRADE_THRESHOLDS: [(i32, Grade); 11] = [
    (95, Grade::APlus),
    (90, Grade::A),
    (85, Grade::AMinus),
    (80, Grade::BPlus),
    (75, Grade::B),
    (70, Grade::BMinus),
    (65, Grade::CPlus),
    (60, Grade::C),
    (55, Grade::CMinus),
    (50, Grade::DPlus),
    (45, Grade::D),
];

impl Grade {
    /// Maps a score to its grade using the fixed threshold table.
    ///
    /// Total over all `i32` values: anything below 45 is an `F`.
    pub fn from_score(score: i32) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    /// Returns the grade as displayed, e.g. `"B+"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Returns the human-readable description for the grade's letter.
    ///
    /// ```
    /// use meeting_cost_engine::models::Grade;
    ///
    /// assert_eq!(Grade::AMinus.description(), "Actually Productive");
    /// assert_eq!(Grade::F.description(), "Everyone Could've Been Napping");
    /// ```
    pub fn description(&self) -> &'static str {
        match self.as_str().chars().next() {
            Some('A') => "Actually Productive",
            Some('B') => "Borderline Acceptable",
            Some('C') => "Could've Been Napping",
            Some('D') => "Time Vortex",
            _ => "Everyone Could've Been Napping",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single signed contribution to an efficiency score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdownItem {
    /// Short label, e.g. "No agenda".
    pub label: String,
    /// Points added to (positive) or removed from (negative) the score.
    pub points: i32,
    /// Human-readable explanation of the entry.
    pub reason: String,
}

impl ScoreBreakdownItem {
    /// Creates a breakdown entry.
    pub fn new(label: impl Into<String>, points: i32, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points,
            reason: reason.into(),
        }
    }
}

/// The result of scoring a meeting.
///
/// `breakdown` is in evaluation order, not importance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyScore {
    /// Letter grade for `score`.
    pub grade: Grade,
    /// Description for `grade`.
    pub grade_description: String,
    /// Numeric score. Starts at 100 and is not clamped.
    pub score: i32,
    /// Ordered contributions that produced `score`.
    pub breakdown: Vec<ScoreBreakdownItem>,
}

impl EfficiencyScore {
    /// Builds a score from a numeric value and breakdown, deriving the grade
    /// and description.
    pub fn from_parts(score: i32, breakdown: Vec<ScoreBreakdownItem>) -> Self {
        let grade = Grade::from_score(score);
        Self {
            grade,
            grade_description: grade.description().to_string(),
            score,
            breakdown,
        }
    }
}
