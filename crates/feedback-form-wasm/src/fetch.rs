//! `fetch`-backed multipart transport

use crate::dom::DomFile;
use async_trait::async_trait;
use feedback_form::{PayloadValue, ServerResponse, SubmissionPayload, Transport, TransportError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, RequestInit, Response};

/// Posts through the page's `fetch`, relative to the page origin.
///
/// `fetch` follows redirects on its own; `response.redirected` and the final
/// `response.url` tell us where the server sent it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_error(value: JsValue) -> TransportError {
    let text = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.to_string()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    TransportError::Js(text)
}

fn form_data(payload: SubmissionPayload<DomFile>) -> Result<FormData, JsValue> {
    let body = FormData::new()?;
    for (name, value) in payload.into_entries() {
        match value {
            PayloadValue::Text(text) => body.append_with_str(name, &text)?,
            PayloadValue::File(DomFile(file)) => {
                body.append_with_blob_and_filename(name, &file, &file.name())?
            }
        }
    }
    Ok(body)
}

#[async_trait(?Send)]
impl Transport<DomFile> for FetchTransport {
    async fn post_multipart(
        &self,
        endpoint: &str,
        payload: SubmissionPayload<DomFile>,
    ) -> Result<ServerResponse, TransportError> {
        let window = web_sys::window().ok_or_else(|| TransportError::Js("no window".to_string()))?;
        let body = form_data(payload).map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&body);

        let response: Response = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let redirect = response.redirected().then(|| response.url());
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        Ok(ServerResponse {
            status: response.status(),
            redirect,
            body: text,
        })
    }
}
