//! Error types for the data service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::upstream::UpstreamError;

// == Service Error Enum ==
/// Unified error type for the query pipeline.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Unparseable request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The upstream data source failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// A column the handler depends on is absent from the upstream data
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Grouping or reduction failed on the upstream data
    #[error("Aggregation error: {0}")]
    Aggregation(String),
}

impl ServiceError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Upstream(_)
            | ServiceError::MissingColumn(_)
            | ServiceError::Aggregation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the data service.
pub type Result<T> = std::result::Result<T, ServiceError>;
