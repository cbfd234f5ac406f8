//! Confirmation-gated step wizard that owns the enrollment form

use super::field::{FieldKey, FieldValue, FormError};
use super::form::EnrollmentForm;
use super::notification::{SuccessToast, DEFAULT_DISMISS_DELAY};
use super::step::Step;
use super::submission::{EnrollmentPayload, SubmissionError, SubmissionReceipt};
use super::transition::{PendingTransition, TransitionKind};
use super::validation::{validate_all, validate_step, ValidationErrors, ValidationPolicy};
use std::time::{Duration, Instant};

/// Snapshot of the wizard's navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: u8,
    pub pending_step: Option<u8>,
    pub transition_kind: Option<TransitionKind>,
    pub dialog_open: bool,
    pub submission_in_flight: bool,
    pub success_visible: bool,
}

/// Coarse phase of the wizard, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Editing(Step),
    ConfirmPending(Step, TransitionKind),
    Submitting,
    SubmittedSuccess,
    SubmissionFailed,
}

/// Result of asking to advance, retreat or submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The confirmation dialog is now open
    Opened(TransitionKind),
    /// The request is meaningless here (edge step, dialog already open)
    Ignored,
    /// Strict validation refused the request
    Blocked(ValidationErrors),
}

/// Result of confirming the open dialog
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    Moved { from: Step, to: Step },
    /// The caller must send the payload and report back via `complete_submission`
    Submitting(EnrollmentPayload),
    Ignored,
}

#[derive(Debug, Clone)]
pub struct EnrollmentWizard {
    form: EnrollmentForm,
    current_step: Step,
    dialog: Option<PendingTransition>,
    submission_in_flight: bool,
    toast: SuccessToast,
    failure: Option<SubmissionError>,
    policy: ValidationPolicy,
    errors: ValidationErrors,
}

impl Default for EnrollmentWizard {
    fn default() -> Self {
        Self::new(ValidationPolicy::default(), DEFAULT_DISMISS_DELAY)
    }
}

impl EnrollmentWizard {
    pub fn new(policy: ValidationPolicy, toast_delay: Duration) -> Self {
        Self {
            form: EnrollmentForm::new(),
            current_step: Step::default(),
            dialog: None,
            submission_in_flight: false,
            toast: SuccessToast::new(toast_delay),
            failure: None,
            policy,
            errors: ValidationErrors::default(),
        }
    }

    pub fn form(&self) -> &EnrollmentForm {
        &self.form
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn dialog(&self) -> Option<&PendingTransition> {
        self.dialog.as_ref()
    }

    /// Inline messages from the last blocked request or rejected submission
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn toast(&self) -> &SuccessToast {
        &self.toast
    }

    pub fn failure(&self) -> Option<&SubmissionError> {
        self.failure.as_ref()
    }

    pub fn is_submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    pub fn state(&self) -> WizardState {
        WizardState {
            current_step: self.current_step.ordinal(),
            pending_step: self
                .dialog
                .as_ref()
                .and_then(|d| d.target())
                .map(Step::ordinal),
            transition_kind: self.dialog.as_ref().map(|d| d.kind()),
            dialog_open: self.dialog.is_some(),
            submission_in_flight: self.submission_in_flight,
            success_visible: self.toast.is_visible(),
        }
    }

    pub fn phase(&self) -> WizardPhase {
        if self.submission_in_flight {
            WizardPhase::Submitting
        } else if let Some(dialog) = &self.dialog {
            WizardPhase::ConfirmPending(self.current_step, dialog.kind())
        } else if self.toast.is_visible() {
            WizardPhase::SubmittedSuccess
        } else if self.failure.is_some() {
            WizardPhase::SubmissionFailed
        } else {
            WizardPhase::Editing(self.current_step)
        }
    }

    /// Merge one edited field into the form
    pub fn on_field_change(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FormError> {
        self.form.set(key, value)?;
        self.errors.clear_field(key);
        tracing::debug!(field = %key, "field changed");
        Ok(())
    }

    pub fn request_advance(&mut self) -> RequestOutcome {
        let gate = match self.policy {
            ValidationPolicy::Strict => validate_step(&self.form, self.current_step),
            ValidationPolicy::Permissive => Ok(()),
        };
        self.open(PendingTransition::advance(self.current_step), gate)
    }

    pub fn request_retreat(&mut self) -> RequestOutcome {
        self.open(PendingTransition::retreat(self.current_step), Ok(()))
    }

    pub fn request_submit(&mut self) -> RequestOutcome {
        let gate = match self.policy {
            ValidationPolicy::Strict => validate_all(&self.form),
            ValidationPolicy::Permissive => Ok(()),
        };
        self.open(PendingTransition::submit(self.current_step), gate)
    }

    fn open(
        &mut self,
        pending: Option<PendingTransition>,
        gate: Result<(), ValidationErrors>,
    ) -> RequestOutcome {
        if self.dialog.is_some() || self.submission_in_flight {
            return RequestOutcome::Ignored;
        }
        let Some(pending) = pending else {
            return RequestOutcome::Ignored;
        };
        if let Err(errors) = gate {
            tracing::info!(
                step = self.current_step.ordinal(),
                count = errors.len(),
                "transition blocked by validation"
            );
            self.errors = errors.clone();
            return RequestOutcome::Blocked(errors);
        }

        let kind = pending.kind();
        self.errors = ValidationErrors::default();
        self.dialog = Some(pending);
        RequestOutcome::Opened(kind)
    }

    /// Accept the open dialog. Only the first confirm of a dialog has any effect.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        let Some(pending) = self.dialog.as_mut() else {
            return ConfirmOutcome::Ignored;
        };
        if pending.is_loading() {
            return ConfirmOutcome::Ignored;
        }

        match (pending.kind(), pending.target()) {
            (TransitionKind::Submit, _) => {
                // Fields stay editable behind the dialog
                if let (ValidationPolicy::Strict, Err(errors)) =
                    (self.policy, validate_all(&self.form))
                {
                    tracing::info!(count = errors.len(), "submission rejected by validation");
                    self.dialog = None;
                    self.failure = Some(SubmissionError::Rejected(errors.iter().cloned().collect()));
                    self.errors = errors;
                    return ConfirmOutcome::Ignored;
                }
                pending.start_loading();
                self.submission_in_flight = true;
                self.failure = None;
                tracing::info!("submitting enrollment");
                ConfirmOutcome::Submitting(EnrollmentPayload::from_form(&self.form))
            }
            (kind, Some(to)) => {
                let from = self.current_step;
                self.current_step = to;
                self.dialog = None;
                tracing::info!(
                    ?kind,
                    from = from.ordinal(),
                    to = to.ordinal(),
                    "step changed"
                );
                ConfirmOutcome::Moved { from, to }
            }
            (_, None) => {
                self.dialog = None;
                ConfirmOutcome::Ignored
            }
        }
    }

    /// Close the dialog without changing anything. Ignored while loading.
    pub fn cancel(&mut self) -> bool {
        match &self.dialog {
            Some(pending) if !pending.is_loading() => {
                self.dialog = None;
                true
            }
            _ => false,
        }
    }

    /// Report the outcome of the submission started by `confirm`.
    ///
    /// Returns false when no submission was in flight.
    pub fn complete_submission(
        &mut self,
        result: Result<SubmissionReceipt, SubmissionError>,
        now: Instant,
    ) -> bool {
        if !self.submission_in_flight {
            return false;
        }
        self.submission_in_flight = false;
        self.dialog = None;

        match result {
            Ok(receipt) => {
                tracing::info!(reference = %receipt.reference_id, "enrollment accepted");
                self.failure = None;
                self.toast.show(receipt, now);
            }
            Err(err) => {
                tracing::warn!(error = %err, "enrollment submission failed");
                if let SubmissionError::Rejected(errors) = &err {
                    self.errors = errors.clone().into();
                }
                self.failure = Some(err);
            }
        }
        true
    }

    pub fn dismiss_success(&mut self) -> bool {
        self.toast.dismiss()
    }

    pub fn dismiss_failure(&mut self) -> bool {
        self.failure.take().is_some()
    }

    /// Advance timers. Returns true when the success toast auto-hid on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toast.tick(now)
    }
}
