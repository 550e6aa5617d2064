//! Form session: field store, error tracking and the submit state machine

use super::errors::ErrorState;
use super::field::{AuxFlags, FieldName, FieldValues, FlagName};
use super::rules::{ValidationRuleSet, LOGIN_RULES, REGISTER_RULES, RESET_RULES};
use crate::identity::{IdentityError, IdentityService};
use thiserror::Error;

/// Which auth screen a session backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
    PasswordReset,
}

impl FormKind {
    /// Declared fields, in display order
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            FormKind::Login => &[FieldName::Email, FieldName::Password],
            FormKind::Register => &[
                FieldName::FullName,
                FieldName::Email,
                FieldName::Phone,
                FieldName::Address,
                FieldName::City,
                FieldName::State,
                FieldName::ZipCode,
                FieldName::Relationship,
                FieldName::PlotNumber,
                FieldName::DeceasedName,
                FieldName::Password,
                FieldName::ConfirmPassword,
            ],
            FormKind::PasswordReset => &[FieldName::Email],
        }
    }

    pub fn rules(&self) -> &'static ValidationRuleSet {
        match self {
            FormKind::Login => &LOGIN_RULES,
            FormKind::Register => &REGISTER_RULES,
            FormKind::PasswordReset => &RESET_RULES,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Login => "Sign In",
            FormKind::Register => "Create Your Cemetery Management Account",
            FormKind::PasswordReset => "Reset Password",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{field}` is not part of the {form:?} form")]
    UndeclaredField { field: FieldName, form: FormKind },
}

/// What the host sees of the submit state machine.
///
/// Validating is never observable: a submit attempt runs to completion
/// before control returns to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitted,
}

/// Result of one submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; errors were published
    Rejected,
    /// The identity service accepted the submission
    Accepted,
    /// The identity service refused or failed; its error was published
    Failed(IdentityError),
    /// A previous attempt was accepted and has not been reset
    AlreadySubmitted,
}

/// State of one form instance, owned by the screen that shows it
#[derive(Debug, Clone)]
pub struct FormSession {
    kind: FormKind,
    values: FieldValues,
    flags: AuxFlags,
    errors: ErrorState,
    state: SubmissionState,
}

impl FormSession {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: FieldValues::declare(kind.fields()),
            flags: AuxFlags::default(),
            errors: ErrorState::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn flags(&self) -> &AuxFlags {
        &self.flags
    }

    /// Errors as last published
    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Store a new value for a declared field.
    ///
    /// Any error recorded for the field is dropped immediately, whether or
    /// not the new value is valid.
    pub fn set_value(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if !self.values.set(field, value.into()) {
            return Err(FormError::UndeclaredField {
                field,
                form: self.kind,
            });
        }
        if self.errors.remove(field) {
            tracing::debug!(field = %field, "cleared field error on edit");
        }
        Ok(())
    }

    /// Update an auxiliary flag. Published errors are left alone.
    pub fn set_flag(&mut self, flag: FlagName, value: bool) {
        self.flags.set(flag, value);
    }

    pub fn toggle_flag(&mut self, flag: FlagName) {
        self.set_flag(flag, !self.flags.get(flag));
    }

    /// Full validation pass over the current snapshot, without publishing
    pub fn validate(&self) -> ErrorState {
        self.kind.rules().validate(&self.values, &self.flags)
    }

    /// Whether a submit right now would pass validation
    pub fn is_submittable(&self) -> bool {
        self.kind.rules().is_valid(&self.validate(), &self.flags)
    }

    /// Leave the Submitted state so the form can be submitted again
    pub fn reset_submission(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Run one submit attempt against the identity service.
    ///
    /// The snapshot is taken when the attempt starts. The service is called
    /// at most once, and only when validation passes.
    pub async fn submit(&mut self, service: &mut dyn IdentityService) -> SubmitOutcome {
        if self.is_submitted() {
            tracing::debug!(form = ?self.kind, "submit ignored, already submitted");
            return SubmitOutcome::AlreadySubmitted;
        }

        let rules = self.kind.rules();
        let errors = rules.validate(&self.values, &self.flags);
        let valid = rules.is_valid(&errors, &self.flags);
        self.errors = errors;
        if !valid {
            tracing::info!(
                form = ?self.kind,
                field_errors = self.errors.field_count(),
                fields = ?self.errors.iter_fields().map(|(f, _)| f.key()).collect::<Vec<_>>(),
                terms = self.errors.terms().is_some(),
                "submission rejected"
            );
            return SubmitOutcome::Rejected;
        }

        debug_assert!(self.errors.is_empty());
        let snapshot = self.values.clone();
        tracing::info!(form = ?self.kind, values = ?snapshot, "submitting");
        let result = match self.kind {
            FormKind::Login => service.sign_in(&snapshot).await,
            FormKind::Register => service.register(&snapshot).await.map(|registration| {
                tracing::info!(account = %registration.account_id, "account registered");
            }),
            FormKind::PasswordReset => {
                service
                    .request_password_reset(snapshot.get(FieldName::Email))
                    .await
            }
        };

        match result {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!(form = ?self.kind, error = %err, "submission failed");
                match err.field() {
                    Some(field) => self.errors.insert(field, err.to_string()),
                    None => self.errors.set_submission(err.to_string()),
                }
                SubmitOutcome::Failed(err)
            }
        }
    }
}
