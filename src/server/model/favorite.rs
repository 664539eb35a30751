//! Favorite domain models and parameters.
//!
//! A favorite is a link row owned by a user that points at a planet or a character.
//! Links are not unique, so the same target may appear several times in a listing.

use crate::{
    model::favorite::{FavoritesDto, ReplaceFavoritesDto, UserFavoritesDto},
    server::model::{character::Character, planet::Planet},
};

/// Every favorite of a user, resolved to the linked planets and characters.
///
/// Both lists follow link insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFavorites {
    /// Id of the user owning the links.
    pub user_id: i32,
    /// One planet per `fav_planet` link.
    pub planets: Vec<Planet>,
    /// One character per `fav_character` link.
    pub characters: Vec<Character>,
}

impl UserFavorites {
    /// Converts the favorites domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserFavoritesDto {
        UserFavoritesDto {
            user_id: self.user_id,
            favorites: FavoritesDto {
                planets: self.planets.into_iter().map(Planet::into_dto).collect(),
                characters: self.characters.into_iter().map(Character::into_dto).collect(),
            },
        }
    }
}

/// Parameters for replacing all favorites of a user.
///
/// Ids that don't resolve to an existing row are dropped by the repository.
#[derive(Debug, Clone)]
pub struct ReplaceFavoritesParams {
    /// Id of the user whose links are replaced.
    pub user_id: i32,
    /// Requested planet ids, in the order links should be created.
    pub planet_ids: Vec<i32>,
    /// Requested character ids, in the order links should be created.
    pub character_ids: Vec<i32>,
}

impl ReplaceFavoritesParams {
    /// Builds replace parameters from the request path and body.
    pub fn from_dto(user_id: i32, dto: ReplaceFavoritesDto) -> Self {
        Self {
            user_id,
            planet_ids: dto.planets,
            character_ids: dto.characters,
        }
    }
}

/// Outcome of a favorites replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacedFavorites {
    /// Planet links created.
    pub planets: usize,
    /// Character links created.
    pub characters: usize,
}
