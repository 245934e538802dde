//! Feedback Form WASM
//!
//! Browser entry point for the feedback form. `initFeedbackForm` binds the controller to
//! the page's elements, wires the submit, counter and clear-on-input
//! listeners, and posts through `fetch`.
//!
//! ```javascript
//! import init, { initFeedbackForm } from './feedback_form_wasm.js';
//!
//! await init();
//! initFeedbackForm({ types: [{ value: 'suggestion' }, { value: 'problem' }] });
//! ```
//!
//! No `tracing` subscriber is installed in the browser, so the controller's
//! `debug!`/`info!`/`warn!` events (validation failures, rejections) are
//! dropped. Submissions that end in `SubmitOutcome::Failed` are reported with
//! `console.error` by the submit listener.

pub mod dom;
pub mod fetch;

use dom::DomView;
use feedback_form::{
    check_text_field, ErrorCatalog, FieldId, FormController, InitData, SubmitOutcome,
    ValidationConfig,
};
use feedback_validation::escape_html as escape;
use fetch::FetchTransport;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Event, EventTarget};

type PageController = FormController<DomView, FetchTransport>;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Bind the form described by `data` (`{ types: [{ value }] }`) to the page.
///
/// Fails if the init data is malformed or any expected element is missing.
#[wasm_bindgen(js_name = initFeedbackForm)]
pub fn init(data: JsValue) -> Result<(), JsValue> {
    let init: InitData = serde_wasm_bindgen::from_value(data)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let view = DomView::bind(window, &document)?;

    let controller: Rc<PageController> = Rc::new(FormController::new(
        ValidationConfig::from_init(&init),
        ErrorCatalog::default(),
        view,
        FetchTransport,
    ));
    controller.init();

    let form = controller.view().form().clone();
    listen(&form, "submit", {
        let controller = Rc::clone(&controller);
        move |event: Event| {
            event.prevent_default();
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                if let SubmitOutcome::Failed(reason) = controller.handle_submit().await {
                    console::error_2(&"feedback form:".into(), &reason.into());
                }
            });
        }
    })?;

    let message = controller.view().field(FieldId::Message).clone();
    listen(&message, "input", {
        let controller = Rc::clone(&controller);
        move |_: Event| {
            controller.handle_message_input();
        }
    })?;

    for field in FieldId::ALL {
        let input = controller.view().field(field).clone();
        listen(&input, "input", {
            let controller = Rc::clone(&controller);
            move |event: Event| {
                // resolve by the element's own id, as the markup names it
                let id = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                    .map(|element| element.id());
                if let Some(field) = id.as_deref().and_then(FieldId::from_dom_id) {
                    controller.handle_input(field);
                }
            }
        })?;
    }

    Ok(())
}

/// Attach `handler` for the page's lifetime
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // the form lives as long as the page
    closure.forget();
    Ok(())
}

/// Validate a single text field with the default rules and messages.
///
/// Returns the message to show, or `null` when the value passes.
/// `feedback_type` has no allowed values here and always fails; use `initFeedbackForm`
/// for the full form.
///
/// # Example (JavaScript)
/// ```javascript
/// validateField('email', 'a@b');   // "Введите корректный email"
/// validateField('phone', '');      // null
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, value: &str) -> Result<Option<String>, JsValue> {
    let field = FieldId::from_dom_id(field)
        .ok_or_else(|| JsValue::from_str(&format!("unknown field: {}", field)))?;
    let config = ValidationConfig::from_init(&InitData::default());

    Ok(check_text_field(field, value, &config)
        .err()
        .map(|err| err.message(&ErrorCatalog::default()).to_string()))
}

/// HTML-escape a string the way submitted values are escaped
#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(value: &str) -> String {
    escape(value)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_validate_field() {
        assert_eq!(validate_field("email", "a@b.c").unwrap(), None);
        assert_eq!(
            validate_field("email", "a@b").unwrap().as_deref(),
            Some(ErrorCatalog::default().email.as_str())
        );
        assert_eq!(validate_field("phone", "").unwrap(), None);
        assert!(validate_field("message", "too short").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn test_validate_unknown_field() {
        assert!(validate_field("order_number", "ORD-1").is_err());
    }

    #[wasm_bindgen_test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#039;x&#039;&gt;");
    }
}
