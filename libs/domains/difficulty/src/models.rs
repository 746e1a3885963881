use crate::error::{DifficultyError, DifficultyResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use ts_rs::TS;
use utoipa::ToSchema;

/// Question difficulty, derived from the share of correct answers.
///
/// Variants are declared in table order: most lenient first, the
/// `Unknown` sentinel last. See [`crate::classifier`] for thresholds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Default,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
    /// Not enough answers to tell
    #[default]
    Unknown,
}

impl Difficulty {
    /// Parse a level name such as `VERY_EASY` (case-insensitive)
    pub fn parse_level(name: &str) -> DifficultyResult<Self> {
        Self::from_str(name.trim()).map_err(|_| DifficultyError::UnknownLevel(name.to_string()))
    }
}

/// Display row for one difficulty level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct DifficultyInfo {
    pub level: Difficulty,
    /// Inclusive lower bound of the correct-answer rate, absent for `Unknown`
    pub rank: Option<i32>,
    pub label: String,
    pub description: String,
}

/// Correct/incorrect answer counters for a single question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct AnswerStats {
    pub correct_count: u64,
    pub incorrect_count: u64,
}

impl AnswerStats {
    pub fn new(correct_count: u64, incorrect_count: u64) -> Self {
        Self {
            correct_count,
            incorrect_count,
        }
    }

    /// Exact number of answers; two `u64` counters always fit in `u128`
    pub fn total(&self) -> u128 {
        u128::from(self.correct_count) + u128::from(self.incorrect_count)
    }

    /// Number of answers clamped to `u64::MAX`
    pub fn attempts(&self) -> u64 {
        u64::try_from(self.total()).unwrap_or(u64::MAX)
    }

    /// Percentage of correct answers, or `None` with fewer than `min_attempts` answers.
    ///
    /// Zero answers never yield a rate, whatever `min_attempts` is.
    pub fn correct_rate(&self, min_attempts: u64) -> Option<f64> {
        let total = self.total();
        if total == 0 || total < u128::from(min_attempts) {
            return None;
        }
        // Multiply first so exact percentages stay exact (4 of 5 is 80.0, not 79.99..)
        Some(self.correct_count as f64 * 100.0 / total as f64)
    }
}

/// Result of assessing a question's answer history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct DifficultyAssessment {
    pub difficulty: Difficulty,
    pub correct_rate: Option<f64>,
    /// Answer count, clamped to `u64::MAX`
    pub attempts: u64,
}
