//! Gateway error type and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mora_aggregate::{AggregationError, CommitmentError};
use mora_pool::PoolError;
use serde_json::json;
use thiserror::Error;

/// Request-level errors, each carrying its HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing fields. 400; not retried.
    #[error("{0}")]
    Validation(String),

    /// No session, or a bad operator key. 401; the message never
    /// distinguishes the cause.
    #[error("Unauthorized")]
    Unauthorized,

    /// Nothing to serve (sample preview before any question went live).
    #[error("{0}")]
    NotFound(String),

    /// Nullifier collision: this identity already voted. 409; final.
    #[error("{0}")]
    Duplicate(String),

    /// Pool invariant breach or exhaustion, or a store failure. 500;
    /// corrupted state additionally requires a manual operator reset.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Duplicate(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "[gateway] request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<PoolError> for ApiError {
    fn from(e: PoolError) -> Self {
        match e {
            PoolError::InvalidQuestion { .. } => ApiError::Validation(e.to_string()),
            PoolError::CorruptedState { .. }
            | PoolError::DuplicateEpoch { .. }
            | PoolError::PoolExhausted
            | PoolError::Storage(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AggregationError> for ApiError {
    fn from(e: AggregationError) -> Self {
        match e {
            AggregationError::NoCommitments { .. } => ApiError::Validation(e.to_string()),
            AggregationError::Storage(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CommitmentError> for ApiError {
    fn from(e: CommitmentError) -> Self {
        match e {
            CommitmentError::DuplicateNullifier => ApiError::Duplicate(e.to_string()),
            CommitmentError::UnknownQuestion { .. } => ApiError::Validation(e.to_string()),
            CommitmentError::Storage(_) => ApiError::Internal(e.to_string()),
        }
    }
}
