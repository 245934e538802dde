// File: src/validate.rs
// Purpose: The submit-time validation pass over all fields

use crate::config::ValidationConfig;
use crate::field::FieldId;
use crate::messages::ErrorCatalog;
use crate::payload::{FileSource, SubmissionPayload};
use feedback_validation::{
    check_attachment, is_one_of, is_valid_email, is_valid_full_name, is_valid_message,
    is_valid_phone, sanitize, AttachmentError,
};

/// Snapshot of the form at the moment of submission
#[derive(Debug, Clone, Default)]
pub struct FormValues<F> {
    pub feedback_type: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub attachment: Option<F>,
}

/// A rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    FeedbackType,
    FullName,
    Email,
    Phone,
    Message,
    FileTooLarge,
    FileType,
}

impl FieldError {
    pub fn field(self) -> FieldId {
        match self {
            FieldError::FeedbackType => FieldId::FeedbackType,
            FieldError::FullName => FieldId::FullName,
            FieldError::Email => FieldId::Email,
            FieldError::Phone => FieldId::Phone,
            FieldError::Message => FieldId::Message,
            FieldError::FileTooLarge | FieldError::FileType => FieldId::File,
        }
    }

    pub fn message(self, catalog: &ErrorCatalog) -> &str {
        match self {
            FieldError::FeedbackType => &catalog.feedback_type,
            FieldError::FullName => &catalog.full_name,
            FieldError::Email => &catalog.email,
            FieldError::Phone => &catalog.phone,
            FieldError::Message => &catalog.message,
            FieldError::FileTooLarge => &catalog.file.size,
            FieldError::FileType => &catalog.file.type_,
        }
    }
}

impl From<AttachmentError> for FieldError {
    fn from(err: AttachmentError) -> Self {
        match err {
            AttachmentError::TooLarge => FieldError::FileTooLarge,
            AttachmentError::UnsupportedType => FieldError::FileType,
        }
    }
}

/// Outcome for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Passed,
    Failed(FieldError),
    /// Optional field left empty: no display change, nothing submitted
    Omitted,
}

/// Result of one validation pass
#[derive(Debug, Clone)]
pub struct ValidationReport<F> {
    checks: Vec<(FieldId, FieldCheck)>,
    payload: SubmissionPayload<F>,
}

impl<F> ValidationReport<F> {
    /// Per-field outcomes in visiting order
    pub fn checks(&self) -> &[(FieldId, FieldCheck)] {
        &self.checks
    }

    pub fn check(&self, field: FieldId) -> Option<&FieldCheck> {
        self.checks
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, check)| check)
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.checks
            .iter()
            .filter_map(|(_, check)| match check {
                FieldCheck::Failed(err) => Some(*err),
                _ => None,
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.checks
            .iter()
            .all(|(_, check)| !matches!(check, FieldCheck::Failed(_)))
    }

    /// The payload, only if every field passed
    pub fn into_payload(self) -> Option<SubmissionPayload<F>> {
        if self.is_valid() {
            Some(self.payload)
        } else {
            None
        }
    }
}

/// Check one text field in isolation.
///
/// Returns the value as it would be submitted, `None` for an optional field
/// left empty, or the rule it broke. [`FieldId::File`] carries no text and
/// always yields `Ok(None)`.
pub fn check_text_field(
    field: FieldId,
    raw: &str,
    config: &ValidationConfig,
) -> Result<Option<String>, FieldError> {
    match field {
        // Compared verbatim: the category comes from a <select>, not free text
        FieldId::FeedbackType => {
            if is_one_of(raw, config.valid_types()) {
                Ok(Some(raw.to_string()))
            } else {
                Err(FieldError::FeedbackType)
            }
        }
        FieldId::FullName => sanitized(raw, is_valid_full_name, FieldError::FullName),
        FieldId::Email => sanitized(raw, is_valid_email, FieldError::Email),
        FieldId::Phone => {
            let phone = sanitize(raw);
            if phone.is_empty() {
                Ok(None)
            } else if is_valid_phone(&phone) {
                Ok(Some(phone))
            } else {
                Err(FieldError::Phone)
            }
        }
        FieldId::Message => {
            let max = config.max_message_length();
            sanitized(raw, |m| is_valid_message(m, max), FieldError::Message)
        }
        FieldId::File => Ok(None),
    }
}

fn sanitized(
    raw: &str,
    rule: impl Fn(&str) -> bool,
    error: FieldError,
) -> Result<Option<String>, FieldError> {
    let value = sanitize(raw);
    if rule(&value) {
        Ok(Some(value))
    } else {
        Err(error)
    }
}

/// Evaluate every field. No short-circuit: a failing field never stops the
/// ones after it from being checked.
pub fn validate_values<F: FileSource>(
    values: FormValues<F>,
    config: &ValidationConfig,
) -> ValidationReport<F> {
    let mut checks = Vec::with_capacity(FieldId::ALL.len());
    let mut payload = SubmissionPayload::new();

    let text_fields = [
        (FieldId::FeedbackType, values.feedback_type),
        (FieldId::FullName, values.full_name),
        (FieldId::Email, values.email),
        (FieldId::Phone, values.phone),
        (FieldId::Message, values.message),
    ];
    for (field, raw) in text_fields {
        let check = match check_text_field(field, &raw, config) {
            Ok(Some(value)) => {
                payload.push_text(field.dom_id(), value);
                FieldCheck::Passed
            }
            Ok(None) => FieldCheck::Omitted,
            Err(err) => FieldCheck::Failed(err),
        };
        checks.push((field, check));
    }

    let file_check = match values.attachment {
        None => FieldCheck::Omitted,
        Some(file) => match check_attachment(file.size(), &file.content_type()) {
            Ok(()) => {
                payload.push_file(FieldId::File.dom_id(), file);
                FieldCheck::Passed
            }
            Err(err) => FieldCheck::Failed(err.into()),
        },
    };
    checks.push((FieldId::File, file_check));

    ValidationReport { checks, payload }
}
