//! Error types for the Kuvut tagging client.
//!
//! Every failure the client can surface is a variant of [`Error`]. Nothing is
//! retried or recovered internally; errors reach the caller as soon as they
//! occur.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for tagging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Status code attached to every [`Error::Service`].
///
/// The tagging API reports failures as a bare `error` message and does not
/// distinguish error classes, so all of them share this code.
pub const SERVICE_ERROR_CODE: i32 = -1;

/// The main error type for all tagging API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required option was absent or empty. Raised before any network call.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// The caller asked for something this client never does (token refresh).
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The service answered with a non-empty `error` field.
    #[error("Service error ({code}): {message}")]
    Service {
        /// Always [`SERVICE_ERROR_CODE`]
        code: i32,
        /// The service-provided message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The token endpoint refused to issue a usable token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::UnsupportedOperation(_))
    }

    /// Returns `true` if this error was raised locally because of bad caller
    /// input, before anything was sent over the wire.
    ///
    /// # Example
    ///
    /// ```
    /// use kuvut_tagging::Error;
    ///
    /// let err = Error::MissingParameter("tag".into());
    /// assert!(err.is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter(_)
                | Error::UnsupportedOperation(_)
                | Error::InvalidInput(_)
                | Error::Config(_)
                | Error::UrlParse(_)
        )
    }

    /// Returns `true` if the remote service reported the failure.
    pub fn is_service_error(&self) -> bool {
        matches!(self, Error::Service { .. })
    }

    /// Inspect a parsed response body for the service's `error` sentinel.
    ///
    /// Returns `Some` when the body carries a top-level `error` field that is
    /// not empty. `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` all count as
    /// empty.
    pub(crate) fn from_service_body(body: &Value) -> Option<Self> {
        let error = body.get("error")?;
        if is_empty_value(error) {
            return None;
        }

        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Some(Error::Service {
            code: SERVICE_ERROR_CODE,
            message,
            body: body.clone(),
        })
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_classification() {
        assert!(Error::MissingParameter("name".into()).is_client_error());
        assert!(Error::UnsupportedOperation("refresh".into()).is_auth_error());
        assert!(Error::Authentication("denied".into()).is_auth_error());
        assert!(!Error::Config("bad".into()).is_auth_error());
    }

    #[test]
    fn test_from_service_body_string_error() {
        let body = json!({ "error": "not found" });

        match Error::from_service_body(&body) {
            Some(Error::Service {
                code,
                message,
                body: raw,
            }) => {
                assert_eq!(code, SERVICE_ERROR_CODE);
                assert_eq!(message, "not found");
                assert_eq!(raw, body);
            }
            other => panic!("Expected Service error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_service_body_structured_error() {
        let body = json!({ "error": { "reason": "quota" } });
        let err = Error::from_service_body(&body).expect("should be an error");
        assert!(err.is_service_error());
        assert_eq!(err.to_string(), r#"Service error (-1): {"reason":"quota"}"#);
    }

    #[test]
    fn test_empty_error_values_are_ignored() {
        for empty in [
            json!(null),
            json!(false),
            json!(0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            let body = json!({ "error": empty, "id": 1 });
            assert!(
                Error::from_service_body(&body).is_none(),
                "{:?} should not be treated as an error",
                body
            );
        }
    }

    #[test]
    fn test_success_body_has_no_error() {
        assert!(Error::from_service_body(&json!({ "id": 5 })).is_none());
        assert!(Error::from_service_body(&json!([1, 2, 3])).is_none());
        assert!(Error::from_service_body(&Value::Null).is_none());
    }
}
