//! Error type shared by the stores, the exam service and the HTTP handlers.
//!
//! Every variant maps onto one HTTP status through `ResponseError`, so handlers
//! can return `Result<_, AppError>` and rely on `?` for the error path.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorDetail;
use log::{debug, error};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A record id or a stored file does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The request is missing a required field or carries one that cannot be used.
    #[error("{0}")]
    Validation(String),

    #[error("upload exceeds the limit of {0} bytes")]
    PayloadTooLarge(usize),

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("file storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid multipart payload: {0}")]
    Multipart(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Rejects a required text value that is empty or whitespace only.
pub fn ensure_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("field `{}` must not be empty", field)));
    }
    Ok(())
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        Self::Multipart(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("blocking task failed: {}", err))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("request rejected ({}): {}", status, self);
        }
        HttpResponse::build(status).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}
