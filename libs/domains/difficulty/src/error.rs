use core_config::ConfigError;
use thiserror::Error;

/// Result type for difficulty operations
pub type DifficultyResult<T> = Result<T, DifficultyError>;

/// Errors raised around classification. Classification itself never fails.
#[derive(Debug, Error)]
pub enum DifficultyError {
    /// A level name that does not match any difficulty
    #[error("Unknown difficulty level: {0}")]
    UnknownLevel(String),

    #[error("Invalid difficulty configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
