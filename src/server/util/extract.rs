//! Request extractors that report rejections through `AppError`.
//!
//! Axum's stock `Json` and `Path` extractors answer rejections with plain-text bodies.
//! These wrappers keep every error response in the `{"message": ...}` shape.

use axum::extract::{
    path::ErrorKind,
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts,
};

use crate::server::error::AppError;

/// JSON request body extractor.
///
/// Malformed or mistyped bodies become 400 Bad Request. Other rejections keep axum's
/// status code, such as 415 for a missing content type.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor.
///
/// A segment that doesn't parse as the expected type means the route doesn't exist
/// for that value, so it is reported as 404 Not Found.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(err) => AppError::BadRequest(err.body_text()),
            JsonRejection::JsonDataError(err) => AppError::BadRequest(err.body_text()),
            other => AppError::Api {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
                ErrorKind::ParseError { .. }
                | ErrorKind::ParseErrorAtIndex { .. }
                | ErrorKind::ParseErrorAtKey { .. } => {
                    AppError::NotFound(format!("Ruta no encontrada: {}", err.body_text()))
                }
                _ => AppError::Api {
                    status: err.status(),
                    message: err.body_text(),
                },
            },
            other => AppError::Api {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}
