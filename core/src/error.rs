//! Error types for the API client.
//!
//! # Design
//! Every way a call can fail is first captured as a `Failure`, a plain
//! description of what the transport or backend did. `classify` turns that
//! into one `ErrorKind` with a single ordered match, so the precedence
//! (413, 400, 500, timeout, everything else) reads top to bottom. `ApiError`
//! carries the kind and the message shown to the user; its `Display` is the
//! message and nothing else.

use thiserror::Error;

pub const MSG_PAYLOAD_TOO_LARGE: &str = "File too large. Please choose a smaller file.";
pub const MSG_BAD_REQUEST: &str = "Invalid request.";
pub const MSG_SERVER_ERROR: &str = "Server error. Please try again later.";
pub const MSG_TIMEOUT: &str = "Request timeout. Please try again.";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred.";

/// What went wrong, before any mapping to user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// No response arrived within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection refused, DNS failure, broken body and the like.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A 2xx body did not match the expected shape.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    Encode(String),
}

/// The fixed set every failure collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PayloadTooLarge,
    BadRequest,
    ServerError,
    Timeout,
    Unknown,
}

pub fn classify(failure: &Failure) -> ErrorKind {
    match failure {
        Failure::Status { status: 413, .. } => ErrorKind::PayloadTooLarge,
        Failure::Status { status: 400, .. } => ErrorKind::BadRequest,
        Failure::Status { status: 500, .. } => ErrorKind::ServerError,
        Failure::Timeout => ErrorKind::Timeout,
        Failure::Status { .. } | Failure::Transport(_) | Failure::Decode(_) | Failure::Encode(_) => {
            ErrorKind::Unknown
        }
    }
}

/// Backend-supplied detail, only ever carried by a status failure.
fn detail(failure: &Failure) -> Option<&str> {
    match failure {
        Failure::Status { detail, .. } => detail.as_deref(),
        _ => None,
    }
}

/// Error surfaced to callers. Display it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Failure> for ApiError {
    fn from(failure: Failure) -> Self {
        let kind = classify(&failure);
        let message = match kind {
            ErrorKind::PayloadTooLarge => MSG_PAYLOAD_TOO_LARGE.to_string(),
            ErrorKind::BadRequest => detail(&failure).unwrap_or(MSG_BAD_REQUEST).to_string(),
            ErrorKind::ServerError => MSG_SERVER_ERROR.to_string(),
            ErrorKind::Timeout => MSG_TIMEOUT.to_string(),
            ErrorKind::Unknown => detail(&failure).unwrap_or(MSG_UNEXPECTED).to_string(),
        };
        ApiError { kind, message }
    }
}

/// Pull a non-empty string `detail` out of a JSON error body.
///
/// FastAPI-style validation errors carry a list under `detail`; those count
/// as absent.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        _ => None,
    }
}
