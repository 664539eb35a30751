//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. Every error response carries a JSON body of
//! the form `{"message": "..."}`.

pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Missing resources delegate to
/// `ResourceError::into_response()`, while infrastructure failures become a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A planet, character or user id matched no row.
    ///
    /// Results in 404 Not Found with the resource-specific message.
    #[error(transparent)]
    ResourceErr(#[from] ResourceError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Route or resource not found.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request body.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Application-raised error carrying its own status code.
    ///
    /// The message is returned to the client as-is.
    #[error("{message}")]
    Api {
        /// HTTP status returned to the client
        status: StatusCode,
        /// Message returned to the client
        message: String,
    },
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound` and `ResourceErr`
/// - `status` - For `Api`
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, ...)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ResourceErr(err) => err.into_response(),
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { message })).into_response()
            }
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message })).into_response()
            }
            Self::Api { status, message } => {
                if status.is_server_error() {
                    tracing::error!("API error {}: {}", status, message);
                }
                (status, Json(ErrorDto { message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
