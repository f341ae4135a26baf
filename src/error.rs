//! Error types returned by the link resolver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way a lookup can fail.
///
/// Each public operation returns either a value or exactly one of these.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The input is neither a chat account ID nor a game account UUID.
    #[error("invalid identifier {input:?}: {reason}")]
    InvalidIdentifier {
        /// The raw input that failed classification.
        input: String,
        /// Why classification failed.
        reason: InvalidReason,
    },
    /// The request never produced a response.
    #[error("link service request failed")]
    Transport(#[from] TransportError),
    /// The service answered with a status other than 200.
    #[error("unexpected response status {code} ({text})")]
    UnexpectedStatus {
        /// Numeric HTTP status.
        code: u16,
        /// Reason phrase reported alongside the status.
        text: String,
    },
    /// The body could not be decoded into a lookup result.
    #[error("malformed link service response")]
    MalformedResponse(#[from] DecodeError),
    /// The service processed the request but reported `success: false`.
    #[error("link service reported the request as unsuccessful")]
    RequestNotSuccessful,
}

/// Reason an identifier failed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Contains a hyphen but is not UUID-length.
    #[error("hyphenated input must be 36 characters, got {len}")]
    HyphenatedWrongLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// Contains no hyphen and does not parse as an unsigned 64-bit integer.
    #[error("expected a decimal account ID or a UUID")]
    NotNumeric,
}

/// Failure below the HTTP layer.
///
/// Serializable so recorded cassettes can replay failures as well as responses.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum TransportError {
    /// The configured timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// No connection could be established.
    #[error("connection failed: {0}")]
    Connect(String),
    /// Any other client-side failure, including reading the body.
    #[error("{0}")]
    Other(String),
}

/// Failure decoding a response body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not JSON of the expected shape.
    #[error("invalid JSON body")]
    Json(#[from] serde_json::Error),
    /// A field required for the current operation is absent or has an
    /// unusable type.
    #[error("response has no usable `{0}` field")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn transport_error_keeps_source() {
        let err = LinkError::from(TransportError::Timeout("after 3s".into()));
        let source = err.source().expect("transport error should chain");
        assert_eq!(source.to_string(), "request timed out: after 3s");
    }

    #[test]
    fn unexpected_status_formats_code_and_text() {
        let err = LinkError::UnexpectedStatus { code: 502, text: "Bad Gateway".into() };
        assert_eq!(err.to_string(), "unexpected response status 502 (Bad Gateway)");
    }

    #[test]
    fn invalid_identifier_names_input() {
        let err = LinkError::InvalidIdentifier {
            input: "abc-def".into(),
            reason: InvalidReason::HyphenatedWrongLength { len: 7 },
        };
        assert_eq!(
            err.to_string(),
            "invalid identifier \"abc-def\": hyphenated input must be 36 characters, got 7"
        );
    }

    #[test]
    fn transport_error_serializes_with_kind_tag() {
        let value = serde_json::to_value(TransportError::Connect("refused".into())).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "connect", "message": "refused"}));
    }
}
