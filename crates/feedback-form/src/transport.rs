// File: src/transport.rs
// Purpose: The network seam: one multipart POST per submission

use crate::payload::{FileSource, SubmissionPayload};
use crate::response::ServerResponse;
use async_trait::async_trait;
use thiserror::Error;

/// Failure to obtain any response from the server
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP client error
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint or redirect target could not be resolved
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected promise or thrown exception from the browser
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Sends a payload and reports what came back.
///
/// Futures are not required to be `Send`; the browser transport holds
/// JavaScript handles across its await points.
#[async_trait(?Send)]
pub trait Transport<F: FileSource> {
    async fn post_multipart(
        &self,
        endpoint: &str,
        payload: SubmissionPayload<F>,
    ) -> Result<ServerResponse, TransportError>;
}
