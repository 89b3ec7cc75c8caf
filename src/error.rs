use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sea_orm::TransactionError;
use thiserror::Error;

use crate::templates::{not_found_page, server_error_page};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A show referenced rows that do not exist
    #[error("Invalid reference: {}", .0.join("; "))]
    InvalidReference(Vec<String>),
}

/// An id segment that is not a valid integer names no row, so it is a 404
/// like any other unknown id.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::NotFound(rejection.body_text())
    }
}

impl From<TransactionError<AppError>> for AppError {
    fn from(err: TransactionError<AppError>) -> Self {
        match err {
            TransactionError::Connection(e) => Self::Database(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                StatusCode::NOT_FOUND
            }
            Self::InvalidReference(ref missing) => {
                tracing::warn!("Invalid reference: {:?}", missing);
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        let page = if status == StatusCode::NOT_FOUND {
            not_found_page()
        } else {
            server_error_page()
        };

        (status, Html(page.into_string())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
