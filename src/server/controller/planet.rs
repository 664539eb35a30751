use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::PlanetDto,
    },
    server::{
        error::{resource::ResourceError, AppError},
        model::planet::Planet,
        service::planet::PlanetService,
        state::AppState,
        util::extract::ApiPath,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// List all planets.
///
/// # Returns
/// - `200 OK` - JSON array of `{id, name}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let planets_dto: Vec<PlanetDto> = planets.into_iter().map(Planet::into_dto).collect();

    Ok((StatusCode::OK, Json(planets_dto)))
}

/// Get a planet by id.
///
/// # Returns
/// - `200 OK` - The planet as `{id, name}`
/// - `404 Not Found` - No planet with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db)
        .get_by_id(planet_id)
        .await?
        .ok_or(ResourceError::PlanetNotFound(planet_id))?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Delete a planet.
///
/// Favorite links pointing at the planet are deleted with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No planet with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted planet", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = PlanetService::new(&state.db).delete(planet_id).await?;
    if !deleted {
        return Err(ResourceError::PlanetNotFound(planet_id).into());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("El planeta con el id {} fue eliminado correctamente", planet_id),
        }),
    ))
}
