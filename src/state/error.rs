//! State management-specific error types.

use super::form::SubmissionPhase;

/// Errors that can occur during state operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Lifecycle action attempted from a phase that does not allow it
    #[error("Cannot {action} while form is {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: SubmissionPhase,
    },

    /// Form field name not known to the contact form
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}
