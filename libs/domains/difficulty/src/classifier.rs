//! Difficulty classification over a fixed threshold table.
//!
//! A level's `rank` is both its position in the ordering and the inclusive
//! lower bound of the correct-answer rate it covers. Lower rank means a
//! stricter (harder) level. The `Unknown` sentinel sits outside the ordering:
//! every comparison involving it is `false`.

use crate::models::{Difficulty, DifficultyInfo};
use tracing::trace;

/// One row of the classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub difficulty: Difficulty,
    pub rank: i32,
    pub label: &'static str,
    pub description: &'static str,
}

/// Rank carried by the sentinel. Never consulted by classification.
pub const UNKNOWN_RANK: i32 = -1;

/// Strictest non-sentinel level, returned for scores below every threshold.
pub const FLOOR: Difficulty = Difficulty::VeryHard;

/// All levels, most lenient first, sentinel last.
///
/// Indexed by `Difficulty as usize`, so row order must match variant order.
static LEVELS: [Level; 6] = [
    Level {
        difficulty: Difficulty::VeryEasy,
        rank: 80,
        label: "Very easy",
        description: "Nearly everyone answers this correctly",
    },
    Level {
        difficulty: Difficulty::Easy,
        rank: 60,
        label: "Easy",
        description: "Most players answer this correctly",
    },
    Level {
        difficulty: Difficulty::Medium,
        rank: 40,
        label: "Medium",
        description: "Roughly half of the answers are correct",
    },
    Level {
        difficulty: Difficulty::Hard,
        rank: 20,
        label: "Hard",
        description: "Most players get this wrong",
    },
    Level {
        difficulty: Difficulty::VeryHard,
        rank: 0,
        label: "Very hard",
        description: "Almost nobody answers this correctly",
    },
    Level {
        difficulty: Difficulty::Unknown,
        rank: UNKNOWN_RANK,
        label: "Unknown",
        description: "Not enough answers to estimate difficulty",
    },
];

/// Every defined level in table order, sentinel included (last).
pub fn levels() -> &'static [Level] {
    &LEVELS
}

/// Levels that take part in classification and ordering, most lenient first.
pub fn ranked_levels() -> impl Iterator<Item = &'static Level> {
    LEVELS.iter().filter(|level| !level.difficulty.is_unknown())
}

/// Map an optional correct-answer percentage to a difficulty.
///
/// - `None` is `Unknown`.
/// - The score is truncated toward zero before comparison, so `79.9` lands
///   below the level starting at `80`. NaN truncates to `0`; infinities
///   saturate.
/// - Scores below every threshold fall back to [`FLOOR`], never to `Unknown`.
pub fn classify(score: Option<f64>) -> Difficulty {
    let Some(score) = score else {
        trace!("No score, classifying as unknown");
        return Difficulty::Unknown;
    };

    let truncated = score as i32;

    match ranked_levels().find(|level| level.rank <= truncated) {
        Some(level) => {
            trace!(score, truncated, difficulty = %level.difficulty, "Classified score");
            level.difficulty
        }
        None => {
            trace!(score, truncated, "Score below every threshold, using floor level");
            FLOOR
        }
    }
}

/// `true` iff `a` is strictly harder than `b`. Always `false` if either is `Unknown`.
pub fn is_stricter_than(a: Difficulty, b: Difficulty) -> bool {
    if a.is_unknown() || b.is_unknown() {
        return false;
    }
    a.rank() < b.rank()
}

/// `true` iff `a` is strictly easier than `b`. Always `false` if either is `Unknown`.
pub fn is_lenienter_than(a: Difficulty, b: Difficulty) -> bool {
    if a.is_unknown() || b.is_unknown() {
        return false;
    }
    a.rank() > b.rank()
}

impl Difficulty {
    /// All variants in table order
    pub const ALL: [Difficulty; 6] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
        Difficulty::Unknown,
    ];

    pub fn level(self) -> &'static Level {
        &LEVELS[self as usize]
    }

    pub fn rank(self) -> i32 {
        self.level().rank
    }

    pub fn label(self) -> &'static str {
        self.level().label
    }

    pub fn description(self) -> &'static str {
        self.level().description
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Difficulty::Unknown)
    }

    pub fn from_score(score: Option<f64>) -> Self {
        classify(score)
    }

    pub fn is_harder_than(self, other: Difficulty) -> bool {
        is_stricter_than(self, other)
    }

    pub fn is_easier_than(self, other: Difficulty) -> bool {
        is_lenienter_than(self, other)
    }
}

impl From<&Level> for DifficultyInfo {
    fn from(level: &Level) -> Self {
        Self {
            level: level.difficulty,
            rank: (!level.difficulty.is_unknown()).then_some(level.rank),
            label: level.label.to_string(),
            description: level.description.to_string(),
        }
    }
}
