// File: src/response.rs
// Purpose: Interpreting the server's answer to a submission

use serde_json::Value;

/// Statuses whose JSON body carries a `detail` meant for the user:
/// 422 Unprocessable Entity, 413 Payload Too Large, 415 Unsupported Media Type
pub const REJECTION_STATUSES: [u16; 3] = [422, 413, 415];

/// What a transport observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub status: u16,
    /// Where the server sent us, if it redirected
    pub redirect: Option<String>,
    pub body: String,
}

impl ServerResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            redirect: None,
            body: body.into(),
        }
    }

    pub fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            redirect: Some(location.into()),
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decide how the form should react.
    ///
    /// A redirect wins over everything. Otherwise the body must be JSON
    /// whatever the status; a body that does not parse is an unexpected
    /// failure even on 2xx.
    pub fn classify(&self) -> ResponseKind {
        if let Some(location) = &self.redirect {
            return ResponseKind::Redirect(location.clone());
        }

        let body: Value = match serde_json::from_str(&self.body) {
            Ok(body) => body,
            Err(err) => {
                return ResponseKind::Unexpected(format!(
                    "malformed response body (status {}): {}",
                    self.status, err
                ))
            }
        };

        if REJECTION_STATUSES.contains(&self.status) {
            return ResponseKind::Rejected {
                status: self.status,
                detail: detail_of(&body),
            };
        }

        if !self.is_success() {
            return ResponseKind::Unexpected(format!("server responded with status {}", self.status));
        }

        ResponseKind::Success(self.status)
    }
}

/// Non-empty string `detail`; anything else falls back to the generic message
fn detail_of(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}

/// Classified server answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    /// Navigate to the target
    Redirect(String),
    /// Structured rejection with an optional user-facing detail
    Rejected { status: u16, detail: Option<String> },
    /// Anything the user should only see as the generic message
    Unexpected(String),
    /// 2xx without a redirect
    Success(u16),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_redirect_wins() {
        let response = ServerResponse::redirect(303, "http://localhost:8000/feedback/success");
        assert_eq!(
            response.classify(),
            ResponseKind::Redirect("http://localhost:8000/feedback/success".to_string())
        );
    }

    #[rstest]
    #[case(422)]
    #[case(413)]
    #[case(415)]
    fn test_rejection_with_detail(#[case] status: u16) {
        let response = ServerResponse::new(status, r#"{"detail": "X"}"#);
        assert_eq!(
            response.classify(),
            ResponseKind::Rejected {
                status,
                detail: Some("X".to_string())
            }
        );
    }

    #[rstest]
    #[case::no_detail(r#"{}"#)]
    #[case::empty_detail(r#"{"detail": ""}"#)]
    #[case::field_list(r#"{"detail": [{"loc": ["body"]}]}"#)]
    fn test_rejection_without_usable_detail(#[case] body: &str) {
        let response = ServerResponse::new(422, body);
        assert_eq!(
            response.classify(),
            ResponseKind::Rejected {
                status: 422,
                detail: None
            }
        );
    }

    #[rstest]
    #[case(500, r#"{"detail": "db down"}"#)]
    #[case(404, r#"{"detail": "Not Found"}"#)]
    #[case(422, "<html>Bad Gateway</html>")]
    #[case(200, "")]
    fn test_unexpected(#[case] status: u16, #[case] body: &str) {
        let response = ServerResponse::new(status, body);
        assert!(matches!(response.classify(), ResponseKind::Unexpected(_)));
    }

    #[test]
    fn test_success_without_redirect() {
        let response = ServerResponse::new(201, r#"{"id": 7}"#);
        assert_eq!(response.classify(), ResponseKind::Success(201));
    }
}
