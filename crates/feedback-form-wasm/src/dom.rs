//! DOM-backed form view

use feedback_form::field::{CHARS_LEFT_ID, FORM_ID, SERVER_ERROR_ID};
use feedback_form::{FieldId, FileSource, FormView};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window,
};

const HIDDEN: &str = "hidden";
const INVALID: &str = "invalid";

/// A file picked in the `<input type="file">`
#[derive(Debug, Clone)]
pub struct DomFile(pub File);

impl FileSource for DomFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn content_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Element handles looked up once at init
pub struct DomView {
    window: Window,
    form: Element,
    fields: HashMap<FieldId, Element>,
    errors: HashMap<FieldId, Element>,
    chars_left: Element,
    server_error: Element,
}

impl DomView {
    /// Bind every element the form needs. A missing id is a broken page,
    /// reported as an error naming it.
    pub fn bind(window: Window, document: &Document) -> Result<Self, JsValue> {
        let mut fields = HashMap::new();
        let mut errors = HashMap::new();
        for field in FieldId::ALL {
            fields.insert(field, element(document, field.dom_id())?);
            errors.insert(field, element(document, &field.error_id())?);
        }

        Ok(Self {
            form: element(document, FORM_ID)?,
            chars_left: element(document, CHARS_LEFT_ID)?,
            server_error: element(document, SERVER_ERROR_ID)?,
            window,
            fields,
            errors,
        })
    }

    pub fn form(&self) -> &Element {
        &self.form
    }

    pub fn field(&self, field: FieldId) -> &Element {
        &self.fields[&field]
    }

    fn error(&self, field: FieldId) -> &Element {
        &self.errors[&field]
    }
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("feedback form: missing element #{}", id)))
}

// classList updates only fail on tokens with whitespace; ours are constants
fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

impl FormView for DomView {
    type File = DomFile;

    fn value(&self, field: FieldId) -> String {
        let element = self.field(field);
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    fn attachment(&self) -> Option<DomFile> {
        self.field(FieldId::File)
            .dyn_ref::<HtmlInputElement>()
            .and_then(HtmlInputElement::files)
            .and_then(|files| files.get(0))
            .map(DomFile)
    }

    fn set_error_text(&self, field: FieldId, text: &str) {
        self.error(field).set_text_content(Some(text));
    }

    fn show_error(&self, field: FieldId, message: &str) {
        add_class(self.field(field), INVALID);
        let error = self.error(field);
        error.set_text_content(Some(message));
        remove_class(error, HIDDEN);
    }

    fn hide_error(&self, field: FieldId) {
        remove_class(self.field(field), INVALID);
        add_class(self.error(field), HIDDEN);
    }

    fn set_chars_left(&self, remaining: i64) {
        self.chars_left
            .set_text_content(Some(&remaining.to_string()));
    }

    fn show_server_error(&self, message: &str) {
        self.server_error.set_text_content(Some(message));
        remove_class(&self.server_error, HIDDEN);
    }

    fn hide_server_error(&self) {
        add_class(&self.server_error, HIDDEN);
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn navigate(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            web_sys::console::error_2(&"navigation failed:".into(), &err);
        }
    }
}
