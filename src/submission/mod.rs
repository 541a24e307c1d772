//! Delivery of contact inquiries.
//!
//! This module contains the `Submitter` abstraction with its simulated and
//! HTTP implementations, and the cancellable task that runs a submission in
//! the background and reports back to the UI loop.

mod error;
mod pending;

pub use error::SubmissionError;
pub use pending::{CompletionReceiver, CompletionSender, PendingSubmission, SubmissionCompleted, SubmissionTicket};

use crate::config::Config;
use crate::state::ContactFields;
use async_trait::async_trait;
use log::*;
use std::sync::Arc;
use std::time::Duration;

/// Accepts or rejects a contact inquiry.
///
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmissionError>;
}

/// Stand-in for a backend: waits for a fixed delay, then always accepts.
///
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        SimulatedSubmitter { delay }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmissionError> {
        debug!(
            "Simulating inquiry delivery for '{}' ({} ms)...",
            fields.email,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Posts the inquiry as JSON to a configured endpoint.
///
pub struct HttpSubmitter {
    endpoint: reqwest::Url,
    http_client: reqwest::Client,
}

impl HttpSubmitter {
    /// Return a new instance for the given endpoint URL.
    ///
    pub fn new(endpoint: &str) -> Result<Self, SubmissionError> {
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|e| SubmissionError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        let http_client = reqwest::Client::builder().build()?;
        Ok(HttpSubmitter {
            endpoint,
            http_client,
        })
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmissionError> {
        debug!("Posting inquiry to {}...", self.endpoint);
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(fields)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unable to read response"));
        error!("Inquiry endpoint answered {}: {}", status, message);
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Build the submitter the configuration asks for.
///
pub fn submitter_from_config(config: &Config) -> Result<Arc<dyn Submitter>, SubmissionError> {
    match &config.submission_endpoint {
        Some(endpoint) => {
            info!("Inquiries will be posted to {}.", endpoint);
            Ok(Arc::new(HttpSubmitter::new(endpoint)?))
        }
        None => {
            info!("No submission endpoint configured, simulating delivery.");
            Ok(Arc::new(SimulatedSubmitter::new(Duration::from_millis(
                config.submission_delay_ms,
            ))))
        }
    }
}
