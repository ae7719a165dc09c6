//! Shared error type across bodytrack crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Derived view requested while no entries exist.
    NoData,
    /// Invalid input / malformed body.
    BadRequest,
    /// Payload too large.
    PayloadTooLarge,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NoData => "NO_DATA",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("No data available")]
    NoData,
    #[error("malformed input: field `{field}` {reason}")]
    MalformedInput { field: String, reason: String },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TrackerError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TrackerError::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TrackerError::NoData => ClientCode::NoData,
            TrackerError::MalformedInput { .. } => ClientCode::BadRequest,
            TrackerError::BadRequest(_) => ClientCode::BadRequest,
            TrackerError::PayloadTooLarge(_) => ClientCode::PayloadTooLarge,
            TrackerError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TrackerError::Internal(_) => ClientCode::Internal,
        }
    }
}
