use crate::error::{DifficultyError, DifficultyResult};
use core_config::{env_parse_or_default, ConfigError, FromEnv};

pub const MIN_ATTEMPTS_ENV: &str = "QUIZ_DIFFICULTY_MIN_ATTEMPTS";
pub const DEFAULT_MIN_ATTEMPTS: u64 = 1;

/// Difficulty assessment configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyConfig {
    /// Answers a question needs before it gets a difficulty other than `Unknown`
    pub min_attempts: u64,
}

impl DifficultyConfig {
    pub fn new(min_attempts: u64) -> Self {
        Self { min_attempts }
    }

    pub fn validate(&self) -> DifficultyResult<()> {
        if self.min_attempts == 0 {
            return Err(DifficultyError::InvalidConfig(
                "min_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            min_attempts: DEFAULT_MIN_ATTEMPTS,
        }
    }
}

impl FromEnv for DifficultyConfig {
    /// Reads `QUIZ_DIFFICULTY_MIN_ATTEMPTS`, defaulting to 1
    fn from_env() -> Result<Self, ConfigError> {
        let min_attempts = env_parse_or_default(MIN_ATTEMPTS_ENV, DEFAULT_MIN_ATTEMPTS)?;
        Ok(Self { min_attempts })
    }
}
