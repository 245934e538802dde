// File: src/controller.rs
// Purpose: FormController - binds a view and a transport, drives validation and submission

use crate::config::{ValidationConfig, DEFAULT_ENDPOINT};
use crate::field::FieldId;
use crate::messages::ErrorCatalog;
use crate::payload::SubmissionPayload;
use crate::response::ResponseKind;
use crate::transport::Transport;
use crate::validate::{validate_values, FieldCheck, FormValues};
use crate::view::FormView;
use feedback_validation::remaining_chars;
use std::cell::Cell;
use tracing::{debug, error, info, warn};

/// What a call to [`FormController::handle_submit`] ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing was sent
    Invalid,
    /// Another submission was still in flight
    Ignored,
    /// The server redirected and the view navigated there
    Redirected(String),
    /// 422/413/415: the banner shows this text
    Rejected(String),
    /// Transport failure, malformed body or unexpected status.
    /// Holds the logged reason; the banner shows the generic message.
    Failed(String),
    /// 2xx without a redirect
    Accepted(u16),
}

/// One instance per page: owns the rules, the message catalog, the bound
/// view and the transport.
pub struct FormController<V, T> {
    config: ValidationConfig,
    messages: ErrorCatalog,
    endpoint: String,
    view: V,
    transport: T,
    pending: Cell<bool>,
}

impl<V, T> FormController<V, T>
where
    V: FormView,
    T: Transport<V::File>,
{
    pub fn new(config: ValidationConfig, messages: ErrorCatalog, view: V, transport: T) -> Self {
        Self {
            config,
            messages,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            view,
            transport,
            pending: Cell::new(false),
        }
    }

    /// Post somewhere other than `/feedback/submit`
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn messages(&self) -> &ErrorCatalog {
        &self.messages
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether a submission is awaiting the server
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Seed every error display with its default message, hidden
    pub fn init(&self) {
        for field in FieldId::ALL {
            self.view.set_error_text(field, self.messages.default_for(field));
            self.view.hide_error(field);
        }
        debug!(types = ?self.config.valid_types(), "feedback form initialized");
    }

    /// Run the validation pass and update every field's display.
    ///
    /// Returns the payload only when all fields passed.
    pub fn validate(&self) -> Option<SubmissionPayload<V::File>> {
        let report = validate_values(self.read_values(), &self.config);

        for (field, check) in report.checks() {
            match check {
                FieldCheck::Passed => self.view.hide_error(*field),
                FieldCheck::Failed(err) => self.view.show_error(*field, err.message(&self.messages)),
                FieldCheck::Omitted => {}
            }
        }

        if !report.is_valid() {
            debug!(errors = ?report.errors(), "feedback form failed validation");
        }
        report.into_payload()
    }

    /// Submit handler. The host suppresses the default form action before
    /// calling this.
    pub async fn handle_submit(&self) -> SubmitOutcome {
        if self.pending.replace(true) {
            debug!("submission already in flight, ignoring");
            return SubmitOutcome::Ignored;
        }
        let _pending = PendingGuard(&self.pending);

        self.submit().await
    }

    async fn submit(&self) -> SubmitOutcome {
        self.view.hide_server_error();

        let Some(payload) = self.validate() else {
            self.view.scroll_to_top();
            return SubmitOutcome::Invalid;
        };

        info!(endpoint = %self.endpoint, fields = ?payload.names(), "submitting feedback");
        let response = match self.transport.post_multipart(&self.endpoint, payload).await {
            Ok(response) => response,
            Err(err) => return self.fail(err.to_string()),
        };

        match response.classify() {
            ResponseKind::Redirect(location) => {
                info!(%location, "feedback accepted, following redirect");
                self.view.navigate(&location);
                SubmitOutcome::Redirected(location)
            }
            ResponseKind::Rejected { status, detail } => {
                let text = detail.unwrap_or_else(|| self.messages.server.clone());
                warn!(status, detail = %text, "feedback rejected by server");
                self.view.show_server_error(&text);
                self.view.scroll_to_top();
                SubmitOutcome::Rejected(text)
            }
            ResponseKind::Unexpected(reason) => self.fail(reason),
            ResponseKind::Success(status) => {
                debug!(status, "feedback accepted without redirect");
                SubmitOutcome::Accepted(status)
            }
        }
    }

    /// Log the real cause, show only the generic message
    fn fail(&self, reason: String) -> SubmitOutcome {
        error!(%reason, "feedback submission failed");
        self.view.show_server_error(&self.messages.server);
        self.view.scroll_to_top();
        SubmitOutcome::Failed(reason)
    }

    /// Message input handler: refresh the remaining-characters counter
    pub fn handle_message_input(&self) -> i64 {
        let remaining = remaining_chars(
            &self.view.value(FieldId::Message),
            self.config.max_message_length(),
        );
        self.view.set_chars_left(remaining);
        remaining
    }

    /// Input handler for any tracked field: drop its error without re-validating
    pub fn handle_input(&self, field: FieldId) {
        self.view.hide_error(field);
    }

    fn read_values(&self) -> FormValues<V::File> {
        FormValues {
            feedback_type: self.view.value(FieldId::FeedbackType),
            full_name: self.view.value(FieldId::FullName),
            email: self.view.value(FieldId::Email),
            phone: self.view.value(FieldId::Phone),
            message: self.view.value(FieldId::Message),
            attachment: self.view.attachment(),
        }
    }
}

/// Clears the pending flag however the submission ends, dropped futures included
struct PendingGuard<'a>(&'a Cell<bool>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
