//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, collected
//! into a single document served by Swagger UI at `/docs`.

use axum::{http::StatusCode, Router};
use tower::Layer;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, error::AppError, state::AppState};

/// Builds the API routes together with their OpenAPI document.
///
/// # Registered Endpoints
/// - `GET /user` - List users
/// - `GET /planet`, `GET /character` - List planets and characters
/// - `GET|DELETE /planets/{id}`, `GET|DELETE /characters/{id}` - Lookup and delete
/// - `GET|PUT /users/{id}/favorites` - List and replace a user's favorites
/// - `POST|DELETE /favorites/planets/{id}` - Add a favorite planet, delete the planet
/// - `POST|DELETE /favorites/characters/{id}` - Add a favorite character, delete the character
pub fn api_routes() -> OpenApiRouter<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(
            controller::planet::get_planet_by_id,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(
            controller::character::get_character_by_id,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::favorite::get_user_favorites,
            controller::favorite::replace_user_favorites
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::delete_favorite_character
        ))
}

/// Builds the complete application router.
///
/// Swagger UI is matched first. Every other request goes to the API router with
/// trailing slashes trimmed, so `/planets/1/` is served like `/planets/1`. Unknown
/// routes answer with a JSON 404 and unsupported methods with a JSON 405.
///
/// # Arguments
/// - `state` - Application state shared by all handlers
///
/// # Returns
/// A `Router` ready to be passed to `axum::serve`.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = api_routes().split_for_parts();

    let api = api
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);
    let api = NormalizePathLayer::trim_trailing_slash().layer(api);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi))
        .fallback_service(api)
        .layer(CorsLayer::permissive())
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Ruta no encontrada".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::Api {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: "Método no permitido".to_string(),
    }
}
