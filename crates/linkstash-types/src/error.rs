use std::fmt;

use thiserror::Error;

/// The standardized backend status code enumeration.
///
/// One variant per gRPC status code. `Ok` is carried for completeness but a
/// successful call never produces a [`BackendError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendCode {
    Ok,
    Canceled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl BackendCode {
    /// Every code in the enumeration, in wire-value order.
    pub const ALL: [BackendCode; 17] = [
        BackendCode::Ok,
        BackendCode::Canceled,
        BackendCode::Unknown,
        BackendCode::InvalidArgument,
        BackendCode::DeadlineExceeded,
        BackendCode::NotFound,
        BackendCode::AlreadyExists,
        BackendCode::PermissionDenied,
        BackendCode::ResourceExhausted,
        BackendCode::FailedPrecondition,
        BackendCode::Aborted,
        BackendCode::OutOfRange,
        BackendCode::Unimplemented,
        BackendCode::Internal,
        BackendCode::Unavailable,
        BackendCode::DataLoss,
        BackendCode::Unauthenticated,
    ];

    /// Canonical SCREAMING_SNAKE_CASE name of the code.
    pub fn name(self) -> &'static str {
        match self {
            BackendCode::Ok => "OK",
            BackendCode::Canceled => "CANCELLED",
            BackendCode::Unknown => "UNKNOWN",
            BackendCode::InvalidArgument => "INVALID_ARGUMENT",
            BackendCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            BackendCode::NotFound => "NOT_FOUND",
            BackendCode::AlreadyExists => "ALREADY_EXISTS",
            BackendCode::PermissionDenied => "PERMISSION_DENIED",
            BackendCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            BackendCode::FailedPrecondition => "FAILED_PRECONDITION",
            BackendCode::Aborted => "ABORTED",
            BackendCode::OutOfRange => "OUT_OF_RANGE",
            BackendCode::Unimplemented => "UNIMPLEMENTED",
            BackendCode::Internal => "INTERNAL",
            BackendCode::Unavailable => "UNAVAILABLE",
            BackendCode::DataLoss => "DATA_LOSS",
            BackendCode::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl fmt::Display for BackendCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure reported by a backend call.
///
/// The message is for server-side logs only; it is never echoed to REST
/// clients.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct BackendError {
    pub code: BackendCode,
    pub message: String,
}

impl BackendError {
    pub fn new(code: BackendCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(BackendCode::Internal, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(BackendCode::Unavailable, message)
    }
}
