//! Request-time error type

use http::StatusCode;
use thiserror::Error;

/// An error with an explicit HTTP status.
///
/// Generated validators and wrappers return these. Business logic may return
/// them too (through `anyhow`); any other error reaching the router is
/// reported as `500 Internal Server Error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create an error with an arbitrary status
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400: a parameter failed decoding or validation
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 403: the credential header is missing or wrong
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// 404: no endpoint is registered under the path
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 406: the endpoint does not accept the request method
    pub fn not_acceptable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_ACCEPTABLE, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status to report for an arbitrary error.
    ///
    /// Finds an `ApiError` anywhere `anyhow` can downcast to (including under
    /// added context); everything else is a 500.
    pub fn status_of(err: &anyhow::Error) -> StatusCode {
        err.downcast_ref::<ApiError>()
            .map(ApiError::status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
