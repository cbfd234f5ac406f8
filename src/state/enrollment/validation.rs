//! Per-field validation rules and the policy that decides when they gate the wizard

use super::field::{FieldKey, FieldKind};
use super::form::EnrollmentForm;
use super::step::Step;
use serde::{Deserialize, Serialize};

/// Whether navigation requests are gated on valid input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Any step may be left with empty or malformed fields
    #[default]
    Permissive,
    /// Advancing requires a valid current step, submitting a valid form
    Strict,
}

/// A constraint violation on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldKey,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldKey, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Violations collected for a step or the whole form, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message recorded for a field
    pub fn for_field(&self, field: FieldKey) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn clear_field(&mut self, field: FieldKey) {
        self.0.retain(|e| e.field != field);
    }

    pub fn first_step(&self) -> Option<Step> {
        self.0.iter().map(|e| e.field.step()).min_by_key(|s| s.index())
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Check one field, returning the message to show next to it
pub fn validate_field(form: &EnrollmentForm, key: FieldKey) -> Option<String> {
    if !form.is_filled(key) {
        if !key.is_required() {
            return None;
        }
        let message = match key.kind() {
            FieldKind::File => "Dokumen wajib diunggah",
            FieldKind::Flag => "Persetujuan wajib dicentang",
            FieldKind::Choice(_) => "Wajib dipilih",
            _ => "Wajib diisi",
        };
        return Some(message.to_string());
    }

    let text = form.text(key).map(str::trim).unwrap_or_default();
    let message = match key {
        FieldKey::Nik if !is_digits(text, 16) => "NIK harus 16 digit angka",
        FieldKey::Nisn if !is_digits(text, 10) => "NISN harus 10 digit angka",
        FieldKey::Phone | FieldKey::GuardianPhone if !is_phone(text) => {
            "Nomor telepon harus 10-14 digit angka"
        }
        FieldKey::ExamScore if !form.score().is_some_and(|s| (0.0..=100.0).contains(&s)) => {
            "Nilai harus antara 0 dan 100"
        }
        FieldKey::GuardianEmail if !is_email(text) => "Format email tidak valid",
        _ => return None,
    };
    Some(message.to_string())
}

/// Check every field shown on a step
pub fn validate_step(form: &EnrollmentForm, step: Step) -> Result<(), ValidationErrors> {
    collect(form, FieldKey::for_step(step))
}

/// Check the whole form
pub fn validate_all(form: &EnrollmentForm) -> Result<(), ValidationErrors> {
    collect(form, FieldKey::ALL.into_iter())
}

fn collect(
    form: &EnrollmentForm,
    keys: impl Iterator<Item = FieldKey>,
) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = keys
        .filter_map(|key| validate_field(form, key).map(|msg| FieldError::new(key, msg)))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn is_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (10..=14).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !value.contains(char::is_whitespace)
        && !domain.contains('@')
}
