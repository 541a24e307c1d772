//! Contact page: the inquiry form and its in-flight submission.

use super::PageContext;
use crate::state::{FormField, FormState, StateError, SubmissionPhase, SubmitOutcome};
use crate::submission::{PendingSubmission, SubmissionCompleted};
use log::*;

/// Owns the form machine and the submission it may be waiting on. Dropping
/// the page cancels that submission.
///
pub struct ContactPage {
    form: FormState,
    focused_field: FormField,
    pending: Option<PendingSubmission>,
    context: PageContext,
}

impl ContactPage {
    pub fn new(context: PageContext) -> Self {
        ContactPage {
            form: FormState::default(),
            focused_field: FormField::Name,
            pending: None,
            context,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focused_field(&self) -> FormField {
        self.focused_field
    }

    pub fn pending(&self) -> Option<&PendingSubmission> {
        self.pending.as_ref()
    }

    pub fn focus_next_field(&mut self) -> &mut Self {
        self.focused_field = self.focused_field.next();
        self
    }

    pub fn focus_previous_field(&mut self) -> &mut Self {
        self.focused_field = self.focused_field.previous();
        self
    }

    pub fn edit_field(&mut self, field: FormField, value: String) -> &mut Self {
        self.form.edit_field(field, value);
        self
    }

    /// Append a typed character to the focused free-text field. Input is
    /// ignored while a submission is in flight. Only the message takes
    /// newlines.
    ///
    pub fn type_char(&mut self, c: char) -> &mut Self {
        if self.is_input_locked() || self.focused_field.options().is_some() {
            return self;
        }
        if c == '\n' && self.focused_field != FormField::Message {
            return self;
        }
        let field = self.focused_field;
        let mut value = self.form.fields().get(field).to_string();
        value.push(c);
        self.edit_field(field, value)
    }

    pub fn backspace(&mut self) -> &mut Self {
        if self.is_input_locked() || self.focused_field.options().is_some() {
            return self;
        }
        let field = self.focused_field;
        let mut value = self.form.fields().get(field).to_string();
        value.pop();
        self.edit_field(field, value)
    }

    /// Step the focused select field through its options; the empty value
    /// ("select an option") sits before the first one.
    ///
    pub fn cycle_option(&mut self, forward: bool) -> &mut Self {
        if self.is_input_locked() {
            return self;
        }
        let field = self.focused_field;
        let Some(options) = field.options() else {
            return self;
        };
        let current = self.form.fields().get(field);
        let position = options.iter().position(|o| o.value == current);
        let slots = options.len() + 1;
        let slot = position.map(|p| p + 1).unwrap_or(0);
        let next = if forward {
            (slot + 1) % slots
        } else {
            (slot + slots - 1) % slots
        };
        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].value.to_string()
        };
        self.edit_field(field, value)
    }

    /// Validate and, when the form is accepted, schedule the submission.
    ///
    pub fn submit(&mut self) -> Result<SubmitOutcome, StateError> {
        let outcome = self.form.submit()?;
        if let SubmitOutcome::Accepted(payload) = &outcome {
            let ticket = self.context.next_ticket();
            self.pending = Some(PendingSubmission::spawn(
                ticket,
                self.context.submitter.clone(),
                payload.clone(),
                self.context.completion_sender.clone(),
            ));
        }
        Ok(outcome)
    }

    /// Apply a settled submission if it is the one this page is waiting on;
    /// anything else is discarded. Returns whether it was applied.
    ///
    pub fn apply_completion(&mut self, completed: SubmissionCompleted) -> bool {
        let expected = self.pending.as_ref().map(PendingSubmission::ticket);
        if expected != Some(completed.ticket) {
            warn!(
                "Discarding completion for {:?}, page is waiting on {:?}.",
                completed.ticket, expected
            );
            return false;
        }
        self.pending = None;
        match self.form.complete(completed.result, self.context.failure_policy) {
            Ok(_) => true,
            Err(e) => {
                warn!("Ignoring completion: {}", e);
                false
            }
        }
    }

    /// The "send another message" action from the thank-you screen.
    ///
    pub fn send_another(&mut self) -> Result<&mut Self, StateError> {
        self.form.reset_after_submission()?;
        self.focused_field = FormField::Name;
        Ok(self)
    }

    pub fn is_input_locked(&self) -> bool {
        self.form.phase() == SubmissionPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactFields, FailurePolicy};
    use crate::submission::{SimulatedSubmitter, SubmissionTicket};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    fn page_with(policy: FailurePolicy) -> (ContactPage, crate::submission::CompletionReceiver) {
        let (tx, rx) = mpsc::channel();
        let context = PageContext::new(
            Arc::new(SimulatedSubmitter::new(Duration::from_millis(2000))),
            policy,
            tx,
        );
        (ContactPage::new(context), rx)
    }

    fn fill(page: &mut ContactPage) {
        page.edit_field(FormField::Name, "Jane Doe".to_string())
            .edit_field(FormField::Email, "jane@x.com".to_string())
            .edit_field(FormField::InquiryType, "bridal".to_string())
            .edit_field(FormField::Message, "Hello".to_string());
    }

    #[test]
    fn newlines_only_reach_the_message() {
        let (mut page, _rx) = page_with(FailurePolicy::Preserve);
        page.type_char('J').type_char('\n');
        assert_eq!(page.form().fields().name, "J");

        while page.focused_field() != FormField::Message {
            page.focus_next_field();
        }
        page.type_char('a').type_char('\n').type_char('b');
        assert_eq!(page.form().fields().message, "a\nb");
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submission_completes_after_delay() {
        let (mut page, rx) = page_with(FailurePolicy::Preserve);
        fill(&mut page);

        assert!(matches!(page.submit(), Ok(SubmitOutcome::Accepted(_))));
        assert_eq!(page.form().phase(), SubmissionPhase::Submitting);
        assert!(page.is_input_locked());

        tokio::time::sleep(Duration::from_millis(2001)).await;
        let completed = rx.try_recv().unwrap();
        assert!(page.apply_completion(completed));
        assert_eq!(page.form().phase(), SubmissionPhase::Submitted);
        assert!(page.form().errors().is_empty());
        assert!(page.pending().is_none());

        page.send_another().unwrap();
        assert_eq!(page.form().fields(), &ContactFields::default());
        assert_eq!(page.form().phase(), SubmissionPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_submission_schedules_nothing() {
        let (mut page, rx) = page_with(FailurePolicy::Preserve);
        assert_eq!(page.submit(), Ok(SubmitOutcome::Invalid));
        assert!(page.pending().is_none());
        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticket_is_discarded() {
        let (mut page, _rx) = page_with(FailurePolicy::Preserve);
        fill(&mut page);
        page.submit().unwrap();
        let applied = page.apply_completion(SubmissionCompleted {
            ticket: SubmissionTicket(u64::MAX),
            result: Ok(()),
        });
        assert!(!applied);
        assert_eq!(page.form().phase(), SubmissionPhase::Submitting);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_returns_to_idle_with_policy() {
        let (mut page, _rx) = page_with(FailurePolicy::Clear);
        fill(&mut page);
        page.submit().unwrap();
        let ticket = page.pending().map(PendingSubmission::ticket).unwrap();
        assert!(page.apply_completion(SubmissionCompleted {
            ticket,
            result: Err("rejected".to_string()),
        }));
        assert_eq!(page.form().phase(), SubmissionPhase::Idle);
        assert_eq!(page.form().submission_error(), Some("rejected"));
        assert_eq!(page.form().fields(), &ContactFields::default());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_pending_submission() {
        let (mut page, rx) = page_with(FailurePolicy::Preserve);
        fill(&mut page);
        page.submit().unwrap();
        drop(page);
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn typing_is_locked_while_submitting() {
        let (mut page, _rx) = page_with(FailurePolicy::Preserve);
        page.type_char('J').type_char('o');
        assert_eq!(page.form().fields().name, "Jo");
        page.backspace();
        assert_eq!(page.form().fields().name, "J");

        fill(&mut page);
        page.submit().unwrap();
        page.type_char('x');
        assert_eq!(page.form().fields().name, "Jane Doe");
    }

    #[tokio::test(start_paused = true)]
    async fn select_fields_cycle_through_options() {
        let (mut page, _rx) = page_with(FailurePolicy::Preserve);
        while page.focused_field() != FormField::InquiryType {
            page.focus_next_field();
        }
        page.type_char('z');
        assert_eq!(page.form().fields().inquiry_type, "");
        page.cycle_option(true);
        assert_eq!(page.form().fields().inquiry_type, "bridal");
        page.cycle_option(false).cycle_option(false);
        assert_eq!(page.form().fields().inquiry_type, "other");
    }
}
