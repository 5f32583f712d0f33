// HTTP error responses
use crate::application::data_service::DataError;
use crate::domain::error::QueryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Malformed request parameters, rejected before reaching a service.
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Injected {
        status: StatusCode,
        message: &'static str,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn server_error() -> Self {
        ApiError::Injected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "The server encountered an error",
        }
    }

    pub fn teapot() -> Self {
        ApiError::Injected {
            status: StatusCode::IM_A_TEAPOT,
            message: "I'm a teapot",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(QueryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Injected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::Query(e) => ApiError::Query(e),
            DataError::Catalog(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
