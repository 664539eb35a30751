use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::CharacterDto,
    },
    server::{
        error::{resource::ResourceError, AppError},
        model::character::Character,
        service::character::CharacterService,
        state::AppState,
        util::extract::ApiPath,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// List all characters.
///
/// # Returns
/// - `200 OK` - JSON array of `{id, name}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let characters_dto: Vec<CharacterDto> = characters.into_iter().map(Character::into_dto).collect();

    Ok((StatusCode::OK, Json(characters_dto)))
}

/// Get a character by id.
///
/// # Returns
/// - `200 OK` - The character as `{id, name}`
/// - `404 Not Found` - No character with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_by_id(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db)
        .get_by_id(character_id)
        .await?
        .ok_or(ResourceError::CharacterNotFound(character_id))?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character.
///
/// Favorite links pointing at the character are deleted with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No character with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = CharacterService::new(&state.db).delete(character_id).await?;
    if !deleted {
        return Err(ResourceError::CharacterNotFound(character_id).into());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!(
                "El personaje con el id {} fue eliminado correctamente",
                character_id
            ),
        }),
    ))
}
