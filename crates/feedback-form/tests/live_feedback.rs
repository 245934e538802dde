/// Initialization, the character counter, and clear-on-input behavior
mod common;

use common::{controller, fill_valid, RecordingTransport};
use feedback_form::{ErrorCatalog, FieldId, SubmitOutcome};

#[test]
fn test_init_seeds_hidden_default_messages() {
    let form = controller(RecordingTransport::default());
    let catalog = ErrorCatalog::default();

    for field in FieldId::ALL {
        assert_eq!(
            form.view().error_text(field).as_deref(),
            Some(catalog.default_for(field)),
            "{field}"
        );
        assert!(!form.view().error_visible(field), "{field}");
    }
}

#[test]
fn test_counter_tracks_raw_message_length() {
    let form = controller(RecordingTransport::default());

    form.view().set(FieldId::Message, "Привет");
    assert_eq!(form.handle_message_input(), 994);
    assert_eq!(form.view().chars_left(), Some(994));

    // untrimmed, unescaped
    form.view().set(FieldId::Message, "  <b>  ");
    assert_eq!(form.handle_message_input(), 993);
}

#[test]
fn test_counter_goes_negative() {
    let form = controller(RecordingTransport::default());
    form.view().set(FieldId::Message, &"x".repeat(1005));
    assert_eq!(form.handle_message_input(), -5);
    assert_eq!(form.view().chars_left(), Some(-5));
}

#[test]
fn test_counter_is_idempotent() {
    let form = controller(RecordingTransport::default());
    form.view().set(FieldId::Message, "одинаковая длина");

    let first = form.handle_message_input();
    for _ in 0..5 {
        assert_eq!(form.handle_message_input(), first);
        assert_eq!(form.view().chars_left(), Some(first));
    }
}

#[tokio::test]
async fn test_input_clears_only_that_field() {
    let form = controller(RecordingTransport::default());
    fill_valid(form.view());
    form.view().set(FieldId::Email, "nope");
    form.view().set(FieldId::Phone, "12");

    assert_eq!(form.handle_submit().await, SubmitOutcome::Invalid);
    assert!(form.view().error_visible(FieldId::Email));
    assert!(form.view().error_visible(FieldId::Phone));

    // still invalid, but the error goes away until the next submit
    form.handle_input(FieldId::Email);
    assert!(!form.view().error_visible(FieldId::Email));
    assert!(!form.view().is_invalid(FieldId::Email));
    assert!(form.view().error_visible(FieldId::Phone));
    assert!(form.view().is_invalid(FieldId::Phone));
}

#[test]
fn test_input_on_clean_field_is_harmless() {
    let form = controller(RecordingTransport::default());
    form.handle_input(FieldId::FullName);
    assert!(!form.view().error_visible(FieldId::FullName));
    assert_eq!(
        form.view().error_text(FieldId::FullName).as_deref(),
        Some(ErrorCatalog::default().full_name.as_str())
    );
}
