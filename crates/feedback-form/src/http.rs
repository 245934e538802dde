// File: src/http.rs
// Purpose: Native multipart transport over reqwest

use crate::config::HttpSection;
use crate::payload::{Attachment, PayloadValue, SubmissionPayload};
use crate::response::ServerResponse;
use crate::transport::{Transport, TransportError};
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::multipart::{Form, Part};
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

/// Posts payloads to a fixed origin.
///
/// Redirects are not followed: a 3xx with `Location` is reported as the
/// redirect target, resolved against the request URL, so the caller can
/// decide where to go.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn from_settings(http: &HttpSection) -> Result<Self, TransportError> {
        Self::new(&http.base_url, http.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Turn the payload into a multipart form, preserving field order
fn multipart_form(payload: SubmissionPayload<Attachment>) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for (name, value) in payload.into_entries() {
        form = match value {
            PayloadValue::Text(text) => form.text(name, text),
            PayloadValue::File(attachment) => {
                let part = Part::bytes(attachment.bytes)
                    .file_name(attachment.file_name)
                    .mime_str(&attachment.content_type)?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport<Attachment> for HttpTransport {
    async fn post_multipart(
        &self,
        endpoint: &str,
        payload: SubmissionPayload<Attachment>,
    ) -> Result<ServerResponse, TransportError> {
        let url = self.base_url.join(endpoint)?;
        let form = multipart_form(payload)?;

        let response = self.client.post(url.clone()).multipart(form).send().await?;
        let status = response.status();

        let redirect = if status.is_redirection() {
            response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(|location| url.join(location))
                .transpose()?
                .map(String::from)
        } else {
            None
        };

        let body = response.text().await?;

        Ok(ServerResponse {
            status: status.as_u16(),
            redirect,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpTransport::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(TransportError::Url(_))));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let transport = HttpTransport::new("http://localhost:8000", Duration::from_secs(1)).unwrap();
        let url = transport.base_url().join("/feedback/submit").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/feedback/submit");
    }

    #[test]
    fn test_multipart_form_accepts_attachment() {
        let mut payload = SubmissionPayload::new();
        payload.push_text("feedback_type", "other");
        payload.push_file("file", Attachment::new("a.pdf", "application/pdf", vec![1, 2, 3]));
        assert!(multipart_form(payload).is_ok());
    }
}
