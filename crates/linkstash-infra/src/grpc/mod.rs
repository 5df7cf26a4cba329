//! tonic client plumbing shared by both backend services.
//!
//! Follows the shape of tonic-generated clients: a cheaply cloned `Channel`
//! per call, readiness check, then a unary exchange with `ProstCodec` and a
//! static method path.

pub mod proto;

mod links;
mod users;

pub use links::GrpcLinksClient;
pub use users::GrpcUsersClient;

use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

use linkstash_types::error::{BackendCode, BackendError};

/// Perform one unary RPC over a clone of the channel.
pub(crate) async fn unary<Req, Resp>(
    channel: &Channel,
    path: &'static str,
    request: Req,
) -> Result<Resp, BackendError>
where
    Req: prost::Message + 'static,
    Resp: prost::Message + Default + 'static,
{
    tracing::debug!(path, "backend call");

    let mut grpc = Grpc::new(channel.clone());
    grpc.ready()
        .await
        .map_err(|e| BackendError::unavailable(format!("service not ready: {e}")))?;

    let codec: ProstCodec<Req, Resp> = ProstCodec::default();
    let response = grpc
        .unary(
            tonic::Request::new(request),
            PathAndQuery::from_static(path),
            codec,
        )
        .await
        .map_err(backend_error)?;

    Ok(response.into_inner())
}

/// Translate a tonic status into the transport-free backend error.
pub(crate) fn backend_error(status: tonic::Status) -> BackendError {
    BackendError::new(backend_code(status.code()), status.message())
}

fn backend_code(code: tonic::Code) -> BackendCode {
    match code {
        tonic::Code::Ok => BackendCode::Ok,
        tonic::Code::Cancelled => BackendCode::Canceled,
        tonic::Code::Unknown => BackendCode::Unknown,
        tonic::Code::InvalidArgument => BackendCode::InvalidArgument,
        tonic::Code::DeadlineExceeded => BackendCode::DeadlineExceeded,
        tonic::Code::NotFound => BackendCode::NotFound,
        tonic::Code::AlreadyExists => BackendCode::AlreadyExists,
        tonic::Code::PermissionDenied => BackendCode::PermissionDenied,
        tonic::Code::ResourceExhausted => BackendCode::ResourceExhausted,
        tonic::Code::FailedPrecondition => BackendCode::FailedPrecondition,
        tonic::Code::Aborted => BackendCode::Aborted,
        tonic::Code::OutOfRange => BackendCode::OutOfRange,
        tonic::Code::Unimplemented => BackendCode::Unimplemented,
        tonic::Code::Internal => BackendCode::Internal,
        tonic::Code::Unavailable => BackendCode::Unavailable,
        tonic::Code::DataLoss => BackendCode::DataLoss,
        tonic::Code::Unauthenticated => BackendCode::Unauthenticated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_carries_code_and_message() {
        let status = tonic::Status::not_found("link 123 missing");
        let err = backend_error(status);
        assert_eq!(err.code, BackendCode::NotFound);
        assert_eq!(err.message, "link 123 missing");
    }

    #[test]
    fn test_backend_code_translation() {
        assert_eq!(backend_code(tonic::Code::Internal), BackendCode::Internal);
        assert_eq!(backend_code(tonic::Code::Cancelled), BackendCode::Canceled);
        assert_eq!(
            backend_code(tonic::Code::DeadlineExceeded),
            BackendCode::DeadlineExceeded
        );
        assert_eq!(
            backend_code(tonic::Code::Unauthenticated),
            BackendCode::Unauthenticated
        );
    }
}
