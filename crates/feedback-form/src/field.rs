// File: src/field.rs
// Purpose: Identifiers of the tracked form fields and their page bindings

use std::fmt;

/// One user-editable input tracked by the controller.
///
/// The element ids are a contract with the host markup. Each field's error
/// display lives at `<dom_id>_error`, which is how clear-on-input finds it
/// from nothing but the input's own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FeedbackType,
    FullName,
    Email,
    Phone,
    Message,
    File,
}

impl FieldId {
    /// All fields, in the order the validation pass visits them
    pub const ALL: [FieldId; 6] = [
        FieldId::FeedbackType,
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Message,
        FieldId::File,
    ];

    /// Element id of the input, also the multipart field name
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::FeedbackType => "feedback_type",
            FieldId::FullName => "full_name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
            FieldId::File => "file",
        }
    }

    /// Element id of the field's error display
    pub fn error_id(self) -> String {
        format!("{}_error", self.dom_id())
    }

    /// Reverse lookup, used when an input event only carries the element id
    pub fn from_dom_id(id: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| field.dom_id() == id)
    }

    /// Optional fields are left out of the payload when empty
    pub fn is_optional(self) -> bool {
        matches!(self, FieldId::Phone | FieldId::File)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Element id of the form itself
pub const FORM_ID: &str = "feedbackForm";

/// Element id of the remaining-characters counter
pub const CHARS_LEFT_ID: &str = "charsLeft";

/// Element id of the page-level server error banner
pub const SERVER_ERROR_ID: &str = "serverError";
