//! Top-level error type.
//!
//! Each subsystem (config, submission, state machines) owns its error enum;
//! `AppError` wraps them for the startup path and the terminal loop.

pub use crate::config::ConfigError;
pub use crate::state::StateError;
pub use crate::submission::SubmissionError;

/// Any error that can end the application.
///
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Inquiry delivery errors
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// State management errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
