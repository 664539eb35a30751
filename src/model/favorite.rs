use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// Favorites of a user, one entry per stored link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub planets: Vec<PlanetDto>,
    pub characters: Vec<CharacterDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub user_id: i32,
    pub favorites: FavoritesDto,
}

/// Request body for adding a single favorite.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddFavoriteDto {
    pub user_id: i32,
}

/// Request body for replacing every favorite of a user.
///
/// Missing lists are treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReplaceFavoritesDto {
    #[serde(default)]
    pub planets: Vec<i32>,
    #[serde(default)]
    pub characters: Vec<i32>,
}
