//! Defines the app level error type and its conversion to a JSON response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The errors that may occur in the application.
///
/// Each variant is a classification that the HTTP layer maps to exactly one
/// status code. The payload is the message serialized to the client verbatim.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The caller supplied an argument that fails validation, e.g. a
    /// non-positive transaction ID or an empty country name.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested transaction does not exist or has been logically
    /// deleted.
    #[error("{0}")]
    NotFound(String),

    /// The durable store failed during a lifecycle operation.
    ///
    /// The underlying error should only be logged on the server; the message
    /// carried here names the failing step without leaking SQL details.
    #[error("{0}")]
    Internal(String),

    /// The durable store failed while resolving a currency conversion.
    #[error("{0}")]
    FailedDependency(String),

    /// The exchange-rate feed failed, returned no usable data, or returned a
    /// rate that cannot be applied to the transaction.
    #[error("{0}")]
    BadGateway(String),
}

impl Error {
    /// The HTTP status code this error classification maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedDependency(_) => StatusCode::FAILED_DEPENDENCY,
            Error::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Error::Internal(error.to_string())
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize)]
struct ApiError {
    code: u16,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = ApiError {
            code: status_code.as_u16(),
            message: self.to_string(),
        };

        (status_code, Json(body)).into_response()
    }
}
