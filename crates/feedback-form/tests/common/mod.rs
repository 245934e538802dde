// In-memory page and recording transport shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use feedback_form::{
    Attachment, ErrorCatalog, FieldId, FormController, FormView, InitData, ServerResponse,
    SubmissionPayload, Transport, TransportError, ValidationConfig,
};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

/// Page double: remembers every visible state the controller sets
#[derive(Default)]
pub struct MemoryView {
    values: RefCell<HashMap<FieldId, String>>,
    attachment: RefCell<Option<Attachment>>,
    error_text: RefCell<HashMap<FieldId, String>>,
    visible_errors: RefCell<HashSet<FieldId>>,
    invalid: RefCell<HashSet<FieldId>>,
    chars_left: Cell<Option<i64>>,
    banner: RefCell<String>,
    banner_visible: Cell<bool>,
    scrolls: Cell<usize>,
    navigated: RefCell<Option<String>>,
}

impl MemoryView {
    pub fn set(&self, field: FieldId, value: &str) {
        self.values.borrow_mut().insert(field, value.to_string());
    }

    pub fn attach(&self, attachment: Attachment) {
        *self.attachment.borrow_mut() = Some(attachment);
    }

    pub fn error_text(&self, field: FieldId) -> Option<String> {
        self.error_text.borrow().get(&field).cloned()
    }

    pub fn error_visible(&self, field: FieldId) -> bool {
        self.visible_errors.borrow().contains(&field)
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.invalid.borrow().contains(&field)
    }

    pub fn visible_errors(&self) -> HashSet<FieldId> {
        self.visible_errors.borrow().clone()
    }

    pub fn chars_left(&self) -> Option<i64> {
        self.chars_left.get()
    }

    pub fn banner(&self) -> Option<String> {
        self.banner_visible.get().then(|| self.banner.borrow().clone())
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }

    pub fn navigated(&self) -> Option<String> {
        self.navigated.borrow().clone()
    }
}

impl FormView for MemoryView {
    type File = Attachment;

    fn value(&self, field: FieldId) -> String {
        self.values.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn attachment(&self) -> Option<Attachment> {
        self.attachment.borrow().clone()
    }

    fn set_error_text(&self, field: FieldId, text: &str) {
        self.error_text.borrow_mut().insert(field, text.to_string());
    }

    fn show_error(&self, field: FieldId, message: &str) {
        self.invalid.borrow_mut().insert(field);
        self.set_error_text(field, message);
        self.visible_errors.borrow_mut().insert(field);
    }

    fn hide_error(&self, field: FieldId) {
        self.invalid.borrow_mut().remove(&field);
        self.visible_errors.borrow_mut().remove(&field);
    }

    fn set_chars_left(&self, remaining: i64) {
        self.chars_left.set(Some(remaining));
    }

    fn show_server_error(&self, message: &str) {
        *self.banner.borrow_mut() = message.to_string();
        self.banner_visible.set(true);
    }

    fn hide_server_error(&self) {
        self.banner_visible.set(false);
    }

    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn navigate(&self, url: &str) {
        *self.navigated.borrow_mut() = Some(url.to_string());
    }
}

/// Formatted log output collected from the test's thread
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Lines logged at `level` ("ERROR", "WARN", ...)
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(level))
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing events into a buffer until the guard drops
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

/// Transport double: records each request and replays scripted answers
#[derive(Default)]
pub struct RecordingTransport {
    replies: RefCell<VecDeque<Result<ServerResponse, TransportError>>>,
    requests: RefCell<Vec<(String, SubmissionPayload)>>,
    yield_once: bool,
}

impl RecordingTransport {
    pub fn replying(reply: Result<ServerResponse, TransportError>) -> Self {
        Self {
            replies: RefCell::new(VecDeque::from([reply])),
            ..Default::default()
        }
    }

    /// Suspend once before answering, so a second submit can overlap
    pub fn slow(reply: Result<ServerResponse, TransportError>) -> Self {
        Self {
            yield_once: true,
            ..Self::replying(reply)
        }
    }

    pub fn requests(&self) -> Vec<(String, SubmissionPayload)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport<Attachment> for RecordingTransport {
    async fn post_multipart(
        &self,
        endpoint: &str,
        payload: SubmissionPayload<Attachment>,
    ) -> Result<ServerResponse, TransportError> {
        self.requests
            .borrow_mut()
            .push((endpoint.to_string(), payload));

        if self.yield_once {
            tokio::task::yield_now().await;
        }

        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ServerResponse::new(200, "{}")))
    }
}

pub fn feedback_types() -> InitData {
    InitData::from_json(
        r#"{"types": [
            {"value": "suggestion", "label": "Предложение"},
            {"value": "problem", "label": "Проблема"},
            {"value": "complaint", "label": "Жалоба"},
            {"value": "other", "label": "Другое"}
        ]}"#,
    )
    .unwrap()
}

pub fn controller(
    transport: RecordingTransport,
) -> FormController<MemoryView, RecordingTransport> {
    let form = FormController::new(
        ValidationConfig::from_init(&feedback_types()),
        ErrorCatalog::default(),
        MemoryView::default(),
        transport,
    );
    form.init();
    form
}

/// Fill every required field with a valid value
pub fn fill_valid(view: &MemoryView) {
    view.set(FieldId::FeedbackType, "problem");
    view.set(FieldId::FullName, "Иванов Иван Иванович");
    view.set(FieldId::Email, "example@example.com");
    view.set(FieldId::Message, "Посылка пришла с повреждённой упаковкой.");
}

pub fn redirect_to_success() -> Result<ServerResponse, TransportError> {
    Ok(ServerResponse::redirect(
        303,
        "http://localhost:8000/feedback/success",
    ))
}
