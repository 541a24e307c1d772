//! Cancellable background submission.

use super::Submitter;
use crate::state::ContactFields;
use log::*;
use std::sync::{mpsc, Arc};
use tokio::task::JoinHandle;

pub type CompletionSender = mpsc::Sender<SubmissionCompleted>;
pub type CompletionReceiver = mpsc::Receiver<SubmissionCompleted>;

/// Identifies one submission attempt so late completions can be matched
/// against the page that is still waiting for them.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SubmissionTicket(pub u64);

/// Message sent back to the UI loop once a submission settles.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SubmissionCompleted {
    pub ticket: SubmissionTicket,
    pub result: Result<(), String>,
}

/// A submission running on the runtime. Cancelling or dropping it aborts the
/// task so nothing is reported for a page that no longer exists.
///
#[derive(Debug)]
pub struct PendingSubmission {
    ticket: SubmissionTicket,
    task: JoinHandle<()>,
}

impl PendingSubmission {
    /// Spawn the submission on the current runtime.
    ///
    pub fn spawn(
        ticket: SubmissionTicket,
        submitter: Arc<dyn Submitter>,
        payload: ContactFields,
        sender: CompletionSender,
    ) -> Self {
        debug!("Scheduling submission {:?}...", ticket);
        let task = tokio::spawn(async move {
            let result = submitter
                .submit(&payload)
                .await
                .map_err(|e| e.to_string());
            if sender.send(SubmissionCompleted { ticket, result }).is_err() {
                warn!("Completion receiver gone, dropping result of {:?}.", ticket);
            }
        });
        PendingSubmission { ticket, task }
    }

    pub fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    /// Abort the task if it is still running.
    ///
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!("Cancelling submission {:?}.", self.ticket);
            self.task.abort();
        }
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.cancel();
    }
}
