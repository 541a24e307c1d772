//! Contact form state.
//!
//! This module contains the contact form fields, the submit-time validation
//! rules and the three-phase submission lifecycle.

use super::error::StateError;
use log::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Pattern an email must contain: something, `@`, something, `.`, something.
///
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// Specifying the contact form fields.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    InquiryType,
    Message,
    Budget,
    Timeline,
}

impl FormField {
    /// Return every field in the order the form lays them out.
    ///
    pub fn all() -> [FormField; 7] {
        [
            FormField::Name,
            FormField::Email,
            FormField::Phone,
            FormField::InquiryType,
            FormField::Budget,
            FormField::Timeline,
            FormField::Message,
        ]
    }

    /// Name of the field in the submission payload.
    ///
    pub fn wire_name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::InquiryType => "inquiryType",
            FormField::Message => "message",
            FormField::Budget => "budget",
            FormField::Timeline => "timeline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::InquiryType => "Inquiry Type",
            FormField::Message => "Message",
            FormField::Budget => "Budget Range",
            FormField::Timeline => "Timeline",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Email | FormField::InquiryType | FormField::Message
        )
    }

    /// Options for fields rendered as a select; free-text fields return `None`.
    ///
    pub fn options(&self) -> Option<&'static [SelectOption]> {
        match self {
            FormField::InquiryType => Some(INQUIRY_TYPES),
            FormField::Budget => Some(BUDGET_RANGES),
            FormField::Timeline => Some(TIMELINES),
            _ => None,
        }
    }

    /// Return the field following this one in layout order, wrapping around.
    ///
    pub fn next(&self) -> FormField {
        let fields = FormField::all();
        let index = fields.iter().position(|f| f == self).unwrap_or(0);
        fields[(index + 1) % fields.len()]
    }

    pub fn previous(&self) -> FormField {
        let fields = FormField::all();
        let index = fields.iter().position(|f| f == self).unwrap_or(0);
        fields[(index + fields.len() - 1) % fields.len()]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FormField {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::all()
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| StateError::UnknownField(s.to_string()))
    }
}

/// A select option: submitted value and displayed label.
///
#[derive(Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const INQUIRY_TYPES: &[SelectOption] = &[
    SelectOption { value: "bridal", label: "Bridal Consultation" },
    SelectOption { value: "made-to-measure", label: "Made-to-Measure" },
    SelectOption { value: "alterations", label: "Alterations" },
    SelectOption { value: "collaboration", label: "Collaboration" },
    SelectOption { value: "press", label: "Press Inquiry" },
    SelectOption { value: "studio-rental", label: "Studio Rental" },
    SelectOption { value: "other", label: "Other" },
];

pub const BUDGET_RANGES: &[SelectOption] = &[
    SelectOption { value: "under-5k", label: "Under $5,000" },
    SelectOption { value: "5k-10k", label: "$5,000 - $10,000" },
    SelectOption { value: "10k-20k", label: "$10,000 - $20,000" },
    SelectOption { value: "20k-plus", label: "$20,000+" },
    SelectOption { value: "discuss", label: "Prefer to discuss" },
];

pub const TIMELINES: &[SelectOption] = &[
    SelectOption { value: "3-months", label: "Within 3 months" },
    SelectOption { value: "6-months", label: "3-6 months" },
    SelectOption { value: "1-year", label: "6-12 months" },
    SelectOption { value: "flexible", label: "Flexible" },
];

/// Field values of the contact form; also the submission payload.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub message: String,
    pub budget: String,
    pub timeline: String,
}

impl ContactFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::InquiryType => &self.inquiry_type,
            FormField::Message => &self.message,
            FormField::Budget => &self.budget,
            FormField::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::InquiryType => &mut self.inquiry_type,
            FormField::Message => &mut self.message,
            FormField::Budget => &mut self.budget,
            FormField::Timeline => &mut self.timeline,
        };
        *slot = value;
    }
}

/// Per-field validation messages, only for fields that failed.
///
pub type FormErrors = BTreeMap<FormField, String>;

/// Specifying the submission lifecycle phases.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// What happens to the entered fields when a submission fails.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Preserve,
    Clear,
}

/// Result of a submit attempt that was allowed to run.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays idle with the new error map.
    Invalid,
    /// Validation passed; the payload snapshot to hand to the submitter.
    Accepted(ContactFields),
}

/// Check the email pattern, searching anywhere in the value.
///
pub fn is_valid_email(value: &str) -> bool {
    match Regex::new(EMAIL_PATTERN) {
        Ok(re) => re.is_match(value),
        Err(e) => {
            warn!("Failed to compile regex pattern '{}': {}", EMAIL_PATTERN, e);
            false
        }
    }
}

/// Evaluate the validation rules against the given fields.
///
pub fn validate(fields: &ContactFields) -> FormErrors {
    let mut errors = FormErrors::new();
    if fields.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required".to_string());
    }
    if fields.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required".to_string());
    } else if !is_valid_email(&fields.email) {
        errors.insert(FormField::Email, "Email is invalid".to_string());
    }
    if fields.inquiry_type.trim().is_empty() {
        errors.insert(
            FormField::InquiryType,
            "Please select an inquiry type".to_string(),
        );
    }
    if fields.message.trim().is_empty() {
        errors.insert(FormField::Message, "Message is required".to_string());
    }
    errors
}

/// Contact form values, validation errors and submission phase.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: ContactFields,
    errors: FormErrors,
    phase: SubmissionPhase,
    submission_error: Option<String>,
}

impl FormState {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Form-level error left by a failed submission.
    ///
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    /// Set a field value and clear that field's error only. Accepted in any
    /// phase.
    ///
    pub fn edit_field(&mut self, field: FormField, value: String) -> &mut Self {
        self.fields.set(field, value);
        self.errors.remove(&field);
        self
    }

    /// Set a field by its payload name.
    ///
    pub fn edit_field_by_name(&mut self, name: &str, value: String) -> Result<&mut Self, StateError> {
        let field = name.parse::<FormField>()?;
        Ok(self.edit_field(field, value))
    }

    /// Validate the current fields. On success the form moves to
    /// `Submitting` and the payload to send is returned.
    ///
    pub fn submit(&mut self) -> Result<SubmitOutcome, StateError> {
        if self.phase != SubmissionPhase::Idle {
            return Err(StateError::InvalidTransition {
                action: "submit",
                phase: self.phase,
            });
        }
        self.submission_error = None;
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            debug!(
                "Contact form has {} invalid field(s), staying idle.",
                self.errors.len()
            );
            return Ok(SubmitOutcome::Invalid);
        }
        info!("Contact form valid, submitting inquiry...");
        self.phase = SubmissionPhase::Submitting;
        Ok(SubmitOutcome::Accepted(self.fields.clone()))
    }

    /// Settle an in-flight submission. Success moves to `Submitted`; failure
    /// returns to `Idle` with a form-level error, keeping or clearing the
    /// entered fields per the policy.
    ///
    pub fn complete(
        &mut self,
        result: Result<(), String>,
        policy: FailurePolicy,
    ) -> Result<&mut Self, StateError> {
        if self.phase != SubmissionPhase::Submitting {
            return Err(StateError::InvalidTransition {
                action: "complete submission",
                phase: self.phase,
            });
        }
        match result {
            Ok(()) => {
                info!("Inquiry submitted.");
                self.phase = SubmissionPhase::Submitted;
            }
            Err(reason) => {
                error!("Inquiry submission failed: {}", reason);
                if policy == FailurePolicy::Clear {
                    self.fields = ContactFields::default();
                }
                self.phase = SubmissionPhase::Idle;
                self.submission_error = Some(reason);
            }
        }
        Ok(self)
    }

    /// Clear the form after a successful submission ("send another").
    ///
    pub fn reset_after_submission(&mut self) -> Result<&mut Self, StateError> {
        if self.phase != SubmissionPhase::Submitted {
            return Err(StateError::InvalidTransition {
                action: "reset form",
                phase: self.phase,
            });
        }
        *self = FormState::default();
        Ok(self)
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submit_disabled() {
            "SENDING MESSAGE..."
        } else {
            "SEND MESSAGE"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.edit_field(FormField::Name, "Jane Doe".to_string())
            .edit_field(FormField::Email, "jane@x.com".to_string())
            .edit_field(FormField::InquiryType, "bridal".to_string())
            .edit_field(FormField::Message, "Hello".to_string());
        form
    }

    #[test]
    fn empty_or_blank_required_fields_yield_four_errors() {
        for blank in ["", "   ", "\t\n"] {
            let mut form = FormState::default();
            for field in FormField::all() {
                form.edit_field(field, blank.to_string());
            }
            assert_eq!(form.submit(), Ok(SubmitOutcome::Invalid));
            let keys: Vec<FormField> = form.errors().keys().copied().collect();
            assert_eq!(
                keys,
                vec![
                    FormField::Name,
                    FormField::Email,
                    FormField::InquiryType,
                    FormField::Message
                ]
            );
            assert_eq!(form.phase(), SubmissionPhase::Idle);
        }
    }

    #[test]
    fn error_messages() {
        let mut form = FormState::default();
        form.submit().unwrap();
        assert_eq!(form.error(FormField::Name), Some("Name is required"));
        assert_eq!(form.error(FormField::Email), Some("Email is required"));
        assert_eq!(
            form.error(FormField::InquiryType),
            Some("Please select an inquiry type")
        );
        assert_eq!(form.error(FormField::Message), Some("Message is required"));
        assert_eq!(form.error(FormField::Phone), None);
    }

    #[test]
    fn email_format() {
        let mut form = filled_form();
        form.edit_field(FormField::Email, "not-an-email".to_string());
        assert_eq!(form.submit(), Ok(SubmitOutcome::Invalid));
        assert_eq!(form.error(FormField::Email), Some("Email is invalid"));

        form.edit_field(FormField::Email, "a@b.co".to_string());
        assert!(matches!(form.submit(), Ok(SubmitOutcome::Accepted(_))));
        assert_eq!(form.error(FormField::Email), None);
    }

    #[test]
    fn email_pattern_cases() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@studio.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a @b.co"));
        assert!(!is_valid_email("a@.co"));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = FormState::default();
        form.submit().unwrap();
        form.edit_field(FormField::Name, "J".to_string());
        assert_eq!(form.error(FormField::Name), None);
        assert_eq!(form.errors().len(), 3);
        assert!(form.error(FormField::Email).is_some());

        form.edit_field(FormField::Phone, "555".to_string());
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn submit_replaces_stale_errors() {
        let mut form = FormState::default();
        form.submit().unwrap();
        form.fields.name = "Jane".to_string();
        form.submit().unwrap();
        assert_eq!(form.error(FormField::Name), None);
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn valid_submit_moves_to_submitting() {
        let mut form = filled_form();
        let outcome = form.submit().unwrap();
        let SubmitOutcome::Accepted(payload) = outcome else {
            panic!("expected accepted outcome");
        };
        assert_eq!(payload.name, "Jane Doe");
        assert!(payload.phone.is_empty());
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
        assert!(form.errors().is_empty());
        assert!(form.is_submit_disabled());
        assert_eq!(form.submit_label(), "SENDING MESSAGE...");
    }

    #[test]
    fn submit_outside_idle_is_rejected() {
        let mut form = filled_form();
        form.submit().unwrap();
        let before = form.clone();
        assert_eq!(
            form.submit(),
            Err(StateError::InvalidTransition {
                action: "submit",
                phase: SubmissionPhase::Submitting
            })
        );
        assert_eq!(form, before);
    }

    #[test]
    fn edits_are_accepted_while_submitting() {
        let mut form = filled_form();
        form.submit().unwrap();
        form.edit_field(FormField::Message, "Changed".to_string());
        assert_eq!(form.fields().message, "Changed");
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn successful_completion_then_reset() {
        let mut form = filled_form();
        form.submit().unwrap();
        form.complete(Ok(()), FailurePolicy::Preserve).unwrap();
        assert_eq!(form.phase(), SubmissionPhase::Submitted);
        assert_eq!(form.fields().name, "Jane Doe");
        assert_eq!(form.submit_label(), "SEND MESSAGE");

        form.reset_after_submission().unwrap();
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn reset_outside_submitted_is_rejected() {
        let mut form = filled_form();
        assert!(form.reset_after_submission().is_err());
        assert_eq!(form.fields().name, "Jane Doe");
    }

    #[test]
    fn failed_completion_preserves_fields() {
        let mut form = filled_form();
        form.submit().unwrap();
        form.complete(Err("Service unavailable".to_string()), FailurePolicy::Preserve)
            .unwrap();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.submission_error(), Some("Service unavailable"));
        assert!(form.errors().is_empty());
        assert_eq!(form.fields().email, "jane@x.com");

        assert!(matches!(form.submit(), Ok(SubmitOutcome::Accepted(_))));
        assert_eq!(form.submission_error(), None);
    }

    #[test]
    fn failed_completion_can_clear_fields() {
        let mut form = filled_form();
        form.submit().unwrap();
        form.complete(Err("rejected".to_string()), FailurePolicy::Clear)
            .unwrap();
        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.submission_error(), Some("rejected"));
    }

    #[test]
    fn completion_outside_submitting_is_rejected() {
        let mut form = FormState::default();
        assert!(form.complete(Ok(()), FailurePolicy::Preserve).is_err());
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("inquiryType".parse::<FormField>(), Ok(FormField::InquiryType));
        assert_eq!(
            "inquiry_type".parse::<FormField>(),
            Err(StateError::UnknownField("inquiry_type".to_string()))
        );

        let mut form = FormState::default();
        form.edit_field_by_name("budget", "discuss".to_string()).unwrap();
        assert_eq!(form.fields().budget, "discuss");
        assert!(form.edit_field_by_name("colour", String::new()).is_err());
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let mut fields = ContactFields::default();
        fields.set(FormField::InquiryType, "press".to_string());
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["inquiryType"], "press");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn field_focus_cycles_through_layout() {
        let mut field = FormField::Name;
        for _ in 0..FormField::all().len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Message);
        assert!(FormField::Budget.options().is_some());
        assert!(FormField::Phone.options().is_none());
        assert!(!FormField::Timeline.is_required());
    }
}
