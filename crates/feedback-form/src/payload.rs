// File: src/payload.rs
// Purpose: Multipart submission payload and the attachment abstraction

use std::path::Path;

/// A selected file as the validation pass sees it.
///
/// Native hosts hold the bytes ([`Attachment`]); the browser hands over a
/// handle to a `File` that `fetch` streams itself.
pub trait FileSource: Clone {
    fn file_name(&self) -> String;

    /// Declared MIME type
    fn content_type(&self) -> String;

    /// Size in bytes
    fn size(&self) -> u64;
}

/// In-memory attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension
    pub fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = feedback_validation::guess_content_type(&file_name);
        Ok(Self::new(file_name, content_type, bytes))
    }
}

impl FileSource for Attachment {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn content_type(&self) -> String {
        self.content_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// One multipart value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue<F> {
    Text(String),
    File(F),
}

impl<F> PayloadValue<F> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(text) => Some(text.as_str()),
            PayloadValue::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&F> {
        match self {
            PayloadValue::Text(_) => None,
            PayloadValue::File(file) => Some(file),
        }
    }
}

/// Ordered field-name to value mapping, built fresh on each submit.
///
/// Only fields that passed validation are ever pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload<F = Attachment> {
    entries: Vec<(&'static str, PayloadValue<F>)>,
}

impl<F> Default for SubmissionPayload<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F> SubmissionPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.entries.push((name, PayloadValue::Text(value.into())));
    }

    pub fn push_file(&mut self, name: &'static str, file: F) {
        self.entries.push((name, PayloadValue::File(file)));
    }

    pub fn get(&self, name: &str) -> Option<&PayloadValue<F>> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PayloadValue::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in insertion order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PayloadValue<F>)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn into_entries(self) -> Vec<(&'static str, PayloadValue<F>)> {
        self.entries
    }
}
