use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::response::send_error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed path parameter or request body.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Anything the store reports other than "no rows".
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn invalid_id() -> Self {
        Self::BadRequest("Invalid Product ID".to_string())
    }

    pub fn invalid_payload() -> Self {
        Self::BadRequest("Invalid request payload".to_string())
    }

    pub fn product_not_found() -> Self {
        Self::NotFound("Product not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Database(e) => error!(error = %e, "Store error"),
            other => debug!(status = status.as_u16(), error = %other, "Request rejected"),
        }
        send_error(status, &self.to_string())
    }
}
