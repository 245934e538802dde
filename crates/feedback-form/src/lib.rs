//! # Feedback Form
//!
//! Client-side controller for the feedback/contact form: validates the six
//! fields on submit, posts a multipart payload, and keeps the inline error
//! displays and the server-error banner in step with what happened.
//!
//! The controller never touches a page or a socket directly. It talks to a
//! [`FormView`] (the DOM in the browser, a terminal in `feedback-submit`, an
//! in-memory double in tests) and a [`Transport`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use feedback_form::{ErrorCatalog, FormController, HttpTransport, InitData, ValidationConfig};
//! # use feedback_form::{Attachment, FieldId, FormView};
//! # struct PageView;
//! # impl FormView for PageView {
//! #     type File = Attachment;
//! #     fn value(&self, _: FieldId) -> String { String::new() }
//! #     fn attachment(&self) -> Option<Attachment> { None }
//! #     fn set_error_text(&self, _: FieldId, _: &str) {}
//! #     fn show_error(&self, _: FieldId, _: &str) {}
//! #     fn hide_error(&self, _: FieldId) {}
//! #     fn set_chars_left(&self, _: i64) {}
//! #     fn show_server_error(&self, _: &str) {}
//! #     fn hide_server_error(&self) {}
//! #     fn scroll_to_top(&self) {}
//! #     fn navigate(&self, _: &str) {}
//! # }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let init = InitData::from_json(r#"{"types":[{"value":"problem"}]}"#)?;
//!     let transport = HttpTransport::new("http://localhost:8000", std::time::Duration::from_secs(30))?;
//!
//!     let form = FormController::new(
//!         ValidationConfig::from_init(&init),
//!         ErrorCatalog::default(),
//!         PageView,
//!         transport,
//!     );
//!     form.init();
//!
//!     let outcome = form.handle_submit().await;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod field;
pub mod messages;
pub mod payload;
pub mod response;
pub mod transport;
pub mod validate;
pub mod view;

#[cfg(feature = "http")]
pub mod http;

pub use config::{FeedbackTypeOption, FormSettings, InitData, ValidationConfig, DEFAULT_ENDPOINT};
pub use controller::{FormController, SubmitOutcome};
pub use field::FieldId;
pub use messages::{ErrorCatalog, FileMessages, MessageOverrides};
pub use payload::{Attachment, FileSource, PayloadValue, SubmissionPayload};
pub use response::{ResponseKind, ServerResponse};
pub use transport::{Transport, TransportError};
pub use validate::{check_text_field, validate_values, FieldCheck, FieldError, FormValues, ValidationReport};
pub use view::FormView;

#[cfg(feature = "http")]
pub use http::HttpTransport;
