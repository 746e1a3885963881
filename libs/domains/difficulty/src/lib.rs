//! Difficulty Domain
//!
//! Classifies quiz questions into difficulty levels from their correct-answer
//! rate and compares levels with each other.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Answer counters → rate → assessment, metrics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Classifier  │  ← Pure threshold lookup and level comparison
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Difficulty enum, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_difficulty::{classify, is_stricter_than, Difficulty};
//!
//! assert_eq!(classify(Some(79.9)), Difficulty::Easy);
//! assert_eq!(classify(None), Difficulty::Unknown);
//! assert!(is_stricter_than(Difficulty::Hard, Difficulty::Easy));
//! assert!(!is_stricter_than(Difficulty::Unknown, Difficulty::Hard));
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use classifier::{classify, is_lenienter_than, is_stricter_than, levels, Level, FLOOR};
pub use config::DifficultyConfig;
pub use error::{DifficultyError, DifficultyResult};
pub use models::{AnswerStats, Difficulty, DifficultyAssessment, DifficultyInfo};
pub use service::DifficultyService;
