//! Submission-specific error types.

/// Errors that can occur while delivering a contact inquiry.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Inquiry rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Endpoint URL could not be parsed
    #[error("Invalid submission endpoint: {0}")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_display() {
        let error = SubmissionError::Rejected {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("503"));
        assert!(error_str.contains("Service unavailable"));

        let error = SubmissionError::InvalidEndpoint("not a url".to_string());
        assert!(error.to_string().contains("not a url"));
    }
}
