use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookups of a path or body id that matched no row.
///
/// The display strings are the exact messages returned to API clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("El planeta con el id {0} no existe")]
    PlanetNotFound(i32),
    #[error("El personaje con el id {0} no existe")]
    CharacterNotFound(i32),
    #[error("El usuario con el id {0} no existe")]
    UserNotFound(i32),
}

/// Converts a missing resource into a 404 Not Found response with its message.
impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
