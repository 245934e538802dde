use colored::Colorize;
use feedback_form::{Attachment, FieldId, FormView};

/// Values supplied on the command line
#[derive(Debug, Default)]
pub struct ConsoleInput {
    pub feedback_type: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub attachment: Option<Attachment>,
}

/// Terminal stand-in for the page: errors go to stderr as they are shown
pub struct ConsoleView {
    input: ConsoleInput,
}

impl ConsoleView {
    pub fn new(input: ConsoleInput) -> Self {
        Self { input }
    }
}

impl FormView for ConsoleView {
    type File = Attachment;

    fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::FeedbackType => self.input.feedback_type.clone(),
            FieldId::FullName => self.input.full_name.clone(),
            FieldId::Email => self.input.email.clone(),
            FieldId::Phone => self.input.phone.clone(),
            FieldId::Message => self.input.message.clone(),
            FieldId::File => String::new(),
        }
    }

    fn attachment(&self) -> Option<Attachment> {
        self.input.attachment.clone()
    }

    // Seeded texts are never visible in a terminal
    fn set_error_text(&self, _field: FieldId, _text: &str) {}

    fn show_error(&self, field: FieldId, message: &str) {
        eprintln!("{} {}: {}", "✗".red().bold(), field.to_string().yellow(), message);
    }

    fn hide_error(&self, _field: FieldId) {}

    fn set_chars_left(&self, remaining: i64) {
        let text = format!("{} characters left", remaining);
        if remaining < 0 {
            eprintln!("{}", text.red());
        } else {
            eprintln!("{}", text.dimmed());
        }
    }

    fn show_server_error(&self, message: &str) {
        eprintln!("{} {}", "Server:".red().bold(), message);
    }

    fn hide_server_error(&self) {}

    fn scroll_to_top(&self) {}

    fn navigate(&self, url: &str) {
        println!("{} {}", "→".green().bold(), url);
    }
}
