// File: src/config.rs
// Purpose: Init contract from the host page and settings parsing from feedback.toml

use crate::messages::{ErrorCatalog, MessageOverrides};
use anyhow::{Context, Result};
use feedback_validation::DEFAULT_MAX_MESSAGE_LENGTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Endpoint the form posts to
pub const DEFAULT_ENDPOINT: &str = "/feedback/submit";

/// One selectable feedback category as rendered by the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTypeOption {
    pub value: String,

    #[serde(default)]
    pub label: Option<String>,
}

/// Data the host page hands to `init`
///
/// ```json
/// { "types": [ { "value": "suggestion", "label": "Предложение" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitData {
    #[serde(default)]
    pub types: Vec<FeedbackTypeOption>,
}

impl InitData {
    /// Parse the init contract from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse form init data")
    }

    /// Build from bare category values
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: values
                .into_iter()
                .map(|value| FeedbackTypeOption {
                    value: value.into(),
                    label: None,
                })
                .collect(),
        }
    }
}

/// Rules fixed at initialization and read-only for the rest of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    valid_types: Vec<String>,
    max_message_length: usize,
}

impl ValidationConfig {
    pub fn new(valid_types: Vec<String>, max_message_length: usize) -> Self {
        Self {
            valid_types,
            max_message_length,
        }
    }

    /// Derive the allowed category values from the init contract
    pub fn from_init(init: &InitData) -> Self {
        Self::new(
            init.types.iter().map(|t| t.value.clone()).collect(),
            DEFAULT_MAX_MESSAGE_LENGTH,
        )
    }

    pub fn with_max_message_length(mut self, max_message_length: usize) -> Self {
        self.max_message_length = max_message_length;
        self
    }

    pub fn valid_types(&self) -> &[String] {
        &self.valid_types
    }

    pub fn max_message_length(&self) -> usize {
        self.max_message_length
    }
}

/// Settings file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default)]
    pub form: FormSection,

    #[serde(default)]
    pub http: HttpSection,

    #[serde(default)]
    pub messages: MessageOverrides,
}

/// Form behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
}

/// Native HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSection {
    /// Origin the endpoint is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default values
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_message_length() -> usize {
    DEFAULT_MAX_MESSAGE_LENGTH
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_message_length: default_max_message_length(),
        }
    }
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl FormSettings {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default settings
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse settings file: {:?}", path))
    }

    /// Load settings from the default path (./feedback.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("feedback.toml")
    }

    /// Parse settings from TOML text; empty text yields defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Validation rules for the given init data under these settings
    pub fn validation_config(&self, init: &InitData) -> ValidationConfig {
        ValidationConfig::from_init(init).with_max_message_length(self.form.max_message_length)
    }

    /// Default catalog with this file's overrides applied
    pub fn catalog(&self) -> ErrorCatalog {
        ErrorCatalog::default().with_overrides(&self.messages)
    }
}
