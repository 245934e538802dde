// File: src/view.rs
// Purpose: The page surface the controller reads from and writes to

use crate::field::FieldId;
use crate::payload::FileSource;

/// Everything the controller needs from the host page.
///
/// Methods take `&self`: in the browser the elements are shared handles, and
/// the controller must stay usable by input listeners while a submission is
/// awaiting the network.
pub trait FormView {
    type File: FileSource;

    /// Raw value of a text field. Not called for [`FieldId::File`].
    fn value(&self, field: FieldId) -> String;

    /// The selected attachment, if any
    fn attachment(&self) -> Option<Self::File>;

    /// Put text into a field's error display without changing visibility
    fn set_error_text(&self, field: FieldId, text: &str);

    /// Mark the field invalid and reveal its error display with `message`
    fn show_error(&self, field: FieldId, message: &str);

    /// Clear the invalid mark and hide the field's error display
    fn hide_error(&self, field: FieldId);

    fn set_chars_left(&self, remaining: i64);

    /// Put `message` into the server-error banner and reveal it
    fn show_server_error(&self, message: &str);

    fn hide_server_error(&self);

    fn scroll_to_top(&self);

    /// Leave the page for `url`
    fn navigate(&self, url: &str);
}
