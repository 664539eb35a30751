use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{AddFavoriteDto, ReplaceFavoritesDto, UserFavoritesDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        model::favorite::ReplaceFavoritesParams,
        service::favorite::FavoriteService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Get a user's favorites.
///
/// Returns the planets and characters the user has favorited, one entry per stored
/// link in the order the links were created.
///
/// # Returns
/// - `200 OK` - `{user_id, favorites: {planets, characters}}`
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .get_for_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}

/// Replace a user's favorites.
///
/// Deletes every existing favorite of the user and recreates one link per id that
/// resolves to a stored planet or character. Unknown ids are ignored.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = ReplaceFavoritesDto,
    responses(
        (status = 200, description = "Successfully replaced favorites", body = MessageDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_user_favorites(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<ReplaceFavoritesDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ReplaceFavoritesParams::from_dto(user_id, payload);

    FavoriteService::new(&state.db).replace(params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Favoritos del usuario {} actualizados correctamente.", user_id),
        }),
    ))
}

/// Add a planet to a user's favorites.
///
/// Duplicates are allowed: posting the same pair twice stores two links.
///
/// # Returns
/// - `200 OK` - The user owning the new favorite
/// - `404 Not Found` - Planet or user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = AddFavoriteDto,
    responses(
        (status = 200, description = "Successfully added favorite", body = UserDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AddFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = FavoriteService::new(&state.db)
        .add_planet(planet_id, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Add a character to a user's favorites.
///
/// # Returns
/// - `200 OK` - The user owning the new favorite
/// - `404 Not Found` - Character or user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    request_body = AddFavoriteDto,
    responses(
        (status = 200, description = "Successfully added favorite", body = UserDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 404, description = "Character or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AddFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = FavoriteService::new(&state.db)
        .add_character(character_id, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a favorited planet.
///
/// Removes the planet itself rather than a single user's link, so it disappears from
/// every user's favorites.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No planet with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted planet", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove_planet(planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!(
                "El planeta con el id {} fue eliminado correctamente de sus favoritos",
                planet_id
            ),
        }),
    ))
}

/// Delete a favorited character.
///
/// Removes the character itself rather than a single user's link.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No character with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove_character(character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!(
                "El personaje con el id {} fue eliminado correctamente de sus favoritos",
                character_id
            ),
        }),
    ))
}
