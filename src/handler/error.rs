// Handler error taxonomy
// Every failure maps to exactly one status code and one JSON error body

use thiserror::Error;

/// All the ways a single invocation can fail.
///
/// Client input errors report 400, the advisory client filter reports 403,
/// unsupported verbs report 405, and anything unanticipated lands on
/// [`HandlerError::Fault`] at the outer boundary as a 500. `Fault` is the
/// only variant whose body carries internal error text; this system has no
/// secrets to leak, but a stricter deployment should redact the `details`
/// field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Missing parameters")]
    MissingParameters,
    #[error("Invalid number")]
    InvalidNumber,
    #[error("Invalid operation")]
    InvalidOperation,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Browser access only 1")]
    BlockedAgent,
    #[error("Browser access only 2")]
    UnrecognizedAgent,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Something went wrong: {0}")]
    Fault(String),
}

impl HandlerError {
    /// HTTP status code reported to the gateway
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameters
            | Self::InvalidNumber
            | Self::InvalidOperation
            | Self::DivisionByZero => 400,
            Self::BlockedAgent | Self::UnrecognizedAgent => 403,
            Self::MethodNotAllowed => 405,
            Self::Fault(_) => 500,
        }
    }

    /// JSON-encoded response body for this error
    pub fn body(&self) -> String {
        let value = match self {
            Self::Fault(details) => serde_json::json!({
                "error": "Something went wrong",
                "details": details,
            }),
            other => serde_json::json!({ "error": other.to_string() }),
        };
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(HandlerError::MissingParameters.status_code(), 400);
        assert_eq!(HandlerError::InvalidNumber.status_code(), 400);
        assert_eq!(HandlerError::InvalidOperation.status_code(), 400);
        assert_eq!(HandlerError::DivisionByZero.status_code(), 400);
        assert_eq!(HandlerError::BlockedAgent.status_code(), 403);
        assert_eq!(HandlerError::UnrecognizedAgent.status_code(), 403);
        assert_eq!(HandlerError::MethodNotAllowed.status_code(), 405);
        assert_eq!(HandlerError::Fault("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_client_error_body() {
        let body: serde_json::Value =
            serde_json::from_str(&HandlerError::DivisionByZero.body()).expect("valid JSON");
        assert_eq!(body["error"], "Division by zero");
    }

    #[test]
    fn test_fault_body_carries_details() {
        let err = HandlerError::Fault("expected value at line 1 column 2".to_string());
        let body: serde_json::Value = serde_json::from_str(&err.body()).expect("valid JSON");
        assert_eq!(body["error"], "Something went wrong");
        assert_eq!(body["details"], "expected value at line 1 column 2");
    }
}
