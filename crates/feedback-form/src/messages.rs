// File: src/messages.rs
// Purpose: Localized error-message catalog

use crate::field::FieldId;
use serde::{Deserialize, Serialize};

/// Messages for the two ways an attachment can be refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMessages {
    pub size: String,
    #[serde(rename = "type")]
    pub type_: String,
}

/// Fixed mapping from field to the text shown when it fails validation,
/// plus the generic message for server and network failures.
///
/// Treated as opaque localized text. The defaults are the strings the
/// deployed Russian-language form ships with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCatalog {
    pub feedback_type: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub file: FileMessages,
    pub server: String,
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self {
            feedback_type: "Пожалуйста, выберите тип обращения".to_string(),
            full_name: "ФИО должно быть от 2 до 100 символов".to_string(),
            email: "Введите корректный email".to_string(),
            phone: "Формат: +7 999 123-45-67 (от 5 до 20 символов)".to_string(),
            message: "Сообщение должно быть от 10 до 1000 символов".to_string(),
            file: FileMessages {
                size: "Файл слишком большой. Максимальный размер: 5MB".to_string(),
                type_: "Неподдерживаемый тип файла. Разрешены: JPG, PNG, PDF".to_string(),
            },
            server: "Произошла ошибка при отправке формы. Пожалуйста, попробуйте позже."
                .to_string(),
        }
    }
}

impl ErrorCatalog {
    /// Text an error display is seeded with before anything is validated.
    ///
    /// The attachment has two messages; it starts out with the type one.
    pub fn default_for(&self, field: FieldId) -> &str {
        match field {
            FieldId::FeedbackType => &self.feedback_type,
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
            FieldId::File => &self.file.type_,
        }
    }

    /// Replace any message the overrides provide
    pub fn with_overrides(mut self, overrides: &MessageOverrides) -> Self {
        let slots = [
            (&mut self.feedback_type, &overrides.feedback_type),
            (&mut self.full_name, &overrides.full_name),
            (&mut self.email, &overrides.email),
            (&mut self.phone, &overrides.phone),
            (&mut self.message, &overrides.message),
            (&mut self.file.size, &overrides.file_size),
            (&mut self.file.type_, &overrides.file_type),
            (&mut self.server, &overrides.server),
        ];
        for (slot, replacement) in slots {
            if let Some(text) = replacement {
                *slot = text.clone();
            }
        }
        self
    }
}

/// `[messages]` section of the settings file. Omitted keys keep defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOverrides {
    #[serde(default)]
    pub feedback_type: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub server: Option<String>,
}
