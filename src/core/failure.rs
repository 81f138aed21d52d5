//! Turns a failed `/usercreate` run into a title and detail line for the user.
//!
//! Panel failures carry loosely structured bodies, so the detail is picked by a fixed
//! list of extractors, each consulted only when the previous one found nothing:
//!
//! 1. `errors[0].detail`
//! 2. `errors[0].code`
//! 3. the whole `errors` value
//! 4. the raw response body
//! 5. the error's own message

use crate::core::validation::FieldViolation;
use crate::errors::Error;
use serde_json::Value;

/// Longest detail text placed in an error embed, in characters.
pub const MAX_DETAIL_CHARS: usize = 1000;

/// Title used for validation failures.
pub const VALIDATION_TITLE: &str = "Validation failed";
/// Title used for every other failure.
pub const CREATION_TITLE: &str = "Could not create user";

/// What the extractors get to look at.
#[derive(Debug, Default)]
pub struct FailureSource {
    /// Raw response body, when the panel answered at all
    pub body: Option<String>,
    /// `body` parsed as JSON, when it was JSON
    pub json: Option<Value>,
    /// Display text of the error itself
    pub message: String,
}

impl FailureSource {
    /// Collects the inputs for the extractor chain from an error.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        let body = match error {
            Error::RemoteApi { body, .. } => Some(body.clone()),
            _ => None,
        };
        let json = body
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok());

        Self {
            body,
            json,
            message: error.to_string(),
        }
    }
}

type Extractor = fn(&FailureSource) -> Option<String>;

/// The extractor chain, highest priority first.
pub const EXTRACTORS: [Extractor; 5] = [
    first_error_detail,
    first_error_code,
    errors_value,
    raw_body,
    error_message,
];

// Empty strings, zero, false and null never count as a usable message
fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn first_error_field(source: &FailureSource, field: &str) -> Option<String> {
    source
        .json
        .as_ref()?
        .get("errors")?
        .get(0)?
        .get(field)
        .filter(|value| is_meaningful(value))
        .map(render)
}

fn first_error_detail(source: &FailureSource) -> Option<String> {
    first_error_field(source, "detail")
}

fn first_error_code(source: &FailureSource) -> Option<String> {
    first_error_field(source, "code")
}

fn errors_value(source: &FailureSource) -> Option<String> {
    source
        .json
        .as_ref()?
        .get("errors")
        .filter(|value| is_meaningful(value))
        .map(render)
}

// A body that parses to a JSON string yields the string itself, unquoted
fn raw_body(source: &FailureSource) -> Option<String> {
    match &source.json {
        Some(Value::String(text)) => Some(text.clone()),
        _ => source.body.clone(),
    }
    .filter(|body| !body.is_empty())
}

fn error_message(source: &FailureSource) -> Option<String> {
    Some(source.message.clone())
}

/// Runs the extractor chain and returns the first hit.
#[must_use]
pub fn extract_detail(source: &FailureSource) -> String {
    EXTRACTORS
        .iter()
        .find_map(|extractor| extractor(source))
        .unwrap_or_else(|| source.message.clone())
}

/// Cuts `text` down to at most [`MAX_DETAIL_CHARS`] characters.
#[must_use]
pub fn truncate_detail(text: &str) -> String {
    text.chars().take(MAX_DETAIL_CHARS).collect()
}

/// One bullet line per violation.
#[must_use]
pub fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("• **{}:** {}", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Title and detail text for any failure reaching the command boundary.
#[must_use]
pub fn describe(error: &Error) -> (&'static str, String) {
    match error {
        Error::Validation(violations) => (VALIDATION_TITLE, format_violations(violations)),
        other => (
            CREATION_TITLE,
            truncate_detail(&extract_detail(&FailureSource::from_error(other))),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn remote(body: &str) -> Error {
        Error::RemoteApi {
            status: 422,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_detail_wins() {
        let body = r#"{"errors":[{"code":"ValidationException","detail":"Email already in use"}]}"#;
        let error = remote(body);
        assert_eq!(
            describe(&error),
            (CREATION_TITLE, "Email already in use".to_string())
        );
    }

    #[test]
    fn test_code_when_detail_missing_or_empty() {
        let error = remote(r#"{"errors":[{"code":"DisplayException","detail":""}]}"#);
        assert_eq!(describe(&error).1, "DisplayException");
    }

    #[test]
    fn test_errors_value_when_first_entry_has_nothing() {
        let error = remote(r#"{"errors":[{"status":"500"}]}"#);
        assert_eq!(describe(&error).1, r#"[{"status":"500"}]"#);

        let error = remote(r#"{"errors":"rate limited"}"#);
        assert_eq!(describe(&error).1, "rate limited");
    }

    #[test]
    fn test_raw_body_when_no_errors_key() {
        let error = remote("<html>Bad Gateway</html>");
        assert_eq!(describe(&error).1, "<html>Bad Gateway</html>");

        let error = remote(r#"{"message":"Server Error"}"#);
        assert_eq!(describe(&error).1, r#"{"message":"Server Error"}"#);
    }

    #[test]
    fn test_json_string_body_is_unquoted() {
        let error = remote(r#""Too Many Requests""#);
        assert_eq!(describe(&error).1, "Too Many Requests");

        let error = remote(r#""""#);
        assert_eq!(describe(&error).1, "Request failed with status code 422");
    }

    #[test]
    fn test_error_message_when_body_empty() {
        let error = remote("");
        assert_eq!(describe(&error).1, "Request failed with status code 422");
    }

    #[test]
    fn test_each_extractor_in_isolation() {
        let source = FailureSource {
            body: Some("raw".to_string()),
            json: Some(json!({"errors": [{"detail": "d", "code": "c"}]})),
            message: "msg".to_string(),
        };
        let hits: Vec<Option<String>> = EXTRACTORS.iter().map(|e| e(&source)).collect();
        assert_eq!(hits[0].as_deref(), Some("d"));
        assert_eq!(hits[1].as_deref(), Some("c"));
        let errors: Value = serde_json::from_str(hits[2].as_deref().unwrap_or_default())
            .unwrap_or_default();
        assert_eq!(errors, json!([{"detail": "d", "code": "c"}]));
        assert_eq!(hits[3].as_deref(), Some("raw"));
        assert_eq!(hits[4].as_deref(), Some("msg"));

        let empty = FailureSource {
            message: "msg".to_string(),
            ..FailureSource::default()
        };
        assert_eq!(extract_detail(&empty), "msg");
    }

    #[test]
    fn test_long_detail_truncated_to_limit() {
        let long = "x".repeat(MAX_DETAIL_CHARS + 500);
        let error = remote(&format!(r#"{{"errors":[{{"detail":"{long}"}}]}}"#));
        assert_eq!(describe(&error).1.chars().count(), MAX_DETAIL_CHARS);

        assert_eq!(truncate_detail("short"), "short");
        assert_eq!(truncate_detail(&"é".repeat(1001)).chars().count(), 1000);
    }

    #[test]
    fn test_validation_lists_every_violation() {
        let error = Error::Validation(vec![
            FieldViolation {
                field: "username",
                message: "String must contain at least 3 character(s)".to_string(),
            },
            FieldViolation {
                field: "confirm_password",
                message: "Passwords do not match.".to_string(),
            },
        ]);
        let (title, detail) = describe(&error);
        assert_eq!(title, VALIDATION_TITLE);
        assert_eq!(
            detail,
            "• **username:** String must contain at least 3 character(s)\n\
             • **confirm_password:** Passwords do not match."
        );
    }

    #[test]
    fn test_other_errors_use_their_message() {
        let error = Error::Config {
            message: "boom".to_string(),
        };
        assert_eq!(describe(&error).1, "Configuration error: boom");
    }
}
