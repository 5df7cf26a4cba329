//! Error envelope and backend status translation for the REST surface.

use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use linkstash_types::error::{BackendCode, BackendError};

/// REST-facing application error codes exposed in the envelope.
///
/// Distinct from the backend's own enumeration: this is the gateway's public
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
    InvalidArgument,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    Unauthenticated,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Unavailable,
    DeadlineExceeded,
    Canceled,
    DataLoss,
    Internal,
}

/// JSON body returned on every non-2xx response.
///
/// `message` is populated only for client-side decode failures; backend
/// error text is logged server-side but never echoed to the client.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Gateway-level error returned by every handler.
#[derive(Debug)]
pub enum ApiError {
    /// The backend call failed with a status code.
    Backend(BackendError),
    /// The request body failed to decode; the backend was never called.
    Decode(String),
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        ApiError::Backend(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Decode(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Backend(err) => {
                error!("backend call failed: {err}");
                let (status, code) = status_for(err.code);
                (
                    status,
                    ErrorBody {
                        code,
                        message: None,
                    },
                )
            }
            ApiError::Decode(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: ErrorCode::BadRequest,
                    message: Some(message),
                },
            ),
        };

        encode_envelope(status, &body)
    }
}

/// Map a backend status code to the HTTP status and envelope code.
///
/// Total and deterministic over the whole enumeration, following the
/// canonical gRPC-to-HTTP table. A successful call never reaches this
/// function; a misrouted `Ok` falls into the internal default arm rather
/// than getting its own entry.
pub fn status_for(code: BackendCode) -> (StatusCode, ErrorCode) {
    match code {
        BackendCode::InvalidArgument => (StatusCode::BAD_REQUEST, ErrorCode::InvalidArgument),
        BackendCode::FailedPrecondition => {
            (StatusCode::BAD_REQUEST, ErrorCode::FailedPrecondition)
        }
        BackendCode::OutOfRange => (StatusCode::BAD_REQUEST, ErrorCode::OutOfRange),
        BackendCode::Unauthenticated => (StatusCode::UNAUTHORIZED, ErrorCode::Unauthenticated),
        BackendCode::PermissionDenied => (StatusCode::FORBIDDEN, ErrorCode::PermissionDenied),
        BackendCode::NotFound => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
        BackendCode::AlreadyExists => (StatusCode::CONFLICT, ErrorCode::AlreadyExists),
        BackendCode::Aborted => (StatusCode::CONFLICT, ErrorCode::Aborted),
        BackendCode::ResourceExhausted => {
            (StatusCode::TOO_MANY_REQUESTS, ErrorCode::ResourceExhausted)
        }
        BackendCode::Canceled => (client_closed_request(), ErrorCode::Canceled),
        BackendCode::Unimplemented => (StatusCode::NOT_IMPLEMENTED, ErrorCode::Unimplemented),
        BackendCode::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::Unavailable),
        BackendCode::DeadlineExceeded => (StatusCode::GATEWAY_TIMEOUT, ErrorCode::DeadlineExceeded),
        BackendCode::Ok
        | BackendCode::Unknown
        | BackendCode::Internal
        | BackendCode::DataLoss => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Internal),
    }
}

/// Nonstandard status used by gRPC gateways for client-canceled requests.
fn client_closed_request() -> StatusCode {
    StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize the envelope; degrade to a bare 500 if serialization fails.
fn encode_envelope(status: StatusCode, body: &ErrorBody) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(err) => {
            error!("failed to encode error envelope: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_for_is_total_and_failing() {
        for code in BackendCode::ALL {
            let (status, _) = status_for(code);
            assert!(
                status.is_client_error() || status.is_server_error(),
                "{code} mapped to non-error status {status}"
            );
        }
    }

    #[test]
    fn test_status_for_canonical_entries() {
        assert_eq!(
            status_for(BackendCode::NotFound),
            (StatusCode::NOT_FOUND, ErrorCode::NotFound)
        );
        assert_eq!(
            status_for(BackendCode::AlreadyExists),
            (StatusCode::CONFLICT, ErrorCode::AlreadyExists)
        );
        assert_eq!(
            status_for(BackendCode::DeadlineExceeded),
            (StatusCode::GATEWAY_TIMEOUT, ErrorCode::DeadlineExceeded)
        );
        assert_eq!(status_for(BackendCode::Canceled).0.as_u16(), 499);
    }

    #[test]
    fn test_unrecognized_outcomes_default_to_internal() {
        for code in [BackendCode::Ok, BackendCode::Unknown, BackendCode::DataLoss] {
            let (status, app_code) = status_for(code);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(app_code, ErrorCode::Internal);
        }
    }

    #[test]
    fn test_envelope_omits_absent_message() {
        let body = ErrorBody {
            code: ErrorCode::Internal,
            message: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"code": "internal"}));
    }

    #[test]
    fn test_envelope_includes_decode_message() {
        let body = ErrorBody {
            code: ErrorCode::BadRequest,
            message: Some("expected value at line 1".into()),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["code"], "bad_request");
        assert_eq!(value["message"], "expected value at line 1");
    }

    #[tokio::test]
    async fn test_backend_error_response_suppresses_message() {
        let err = ApiError::Backend(BackendError::internal("secret backend detail"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["code"], "internal");
        assert!(value.get("message").is_none());
    }
}
