//! Favorite business logic.
//!
//! Validates that users and targets exist before touching the link tables and maps
//! missing rows to `ResourceError` so controllers can return the matching 404 message.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::{resource::ResourceError, AppError},
    model::{
        favorite::{ReplaceFavoritesParams, ReplacedFavorites, UserFavorites},
        user::User,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every favorite planet and character of a user.
    ///
    /// # Returns
    /// - `Ok(UserFavorites)` - Linked planets and characters in link order
    /// - `Err(AppError::ResourceErr(UserNotFound))` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_for_user(&self, user_id: i32) -> Result<UserFavorites, AppError> {
        self.require_user(user_id).await?;

        let repo = FavoriteRepository::new(self.db);
        let planets = repo.get_planets_by_user(user_id).await?;
        let characters = repo.get_characters_by_user(user_id).await?;

        Ok(UserFavorites {
            user_id,
            planets,
            characters,
        })
    }

    /// Adds a planet to a user's favorites.
    ///
    /// The planet is checked before the user. Existing links are not inspected, so
    /// calling this twice stores two links.
    ///
    /// # Returns
    /// - `Ok(User)` - The user that now owns the new link
    /// - `Err(AppError::ResourceErr(PlanetNotFound | UserNotFound))` - Missing row
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_planet(&self, planet_id: i32, user_id: i32) -> Result<User, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(planet_id)
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;
        let user = self.require_user(user_id).await?;

        let link_id = FavoriteRepository::new(self.db)
            .add_planet(user.id, planet_id)
            .await?;

        tracing::debug!(
            "Added planet {} to favorites of user {} (link {})",
            planet_id,
            user.id,
            link_id
        );

        Ok(user)
    }

    /// Adds a character to a user's favorites.
    ///
    /// Same contract as `add_planet`.
    pub async fn add_character(&self, character_id: i32, user_id: i32) -> Result<User, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?
            .ok_or(ResourceError::CharacterNotFound(character_id))?;
        let user = self.require_user(user_id).await?;

        let link_id = FavoriteRepository::new(self.db)
            .add_character(user.id, character_id)
            .await?;

        tracing::debug!(
            "Added character {} to favorites of user {} (link {})",
            character_id,
            user.id,
            link_id
        );

        Ok(user)
    }

    /// Handles `DELETE /favorites/planets/{id}`.
    ///
    /// Deletes the planet row itself, not a link. Every user's links to the planet go
    /// with it through the cascading foreign key.
    pub async fn remove_planet(&self, planet_id: i32) -> Result<(), AppError> {
        let deleted = PlanetRepository::new(self.db).delete(planet_id).await?;
        if !deleted {
            return Err(ResourceError::PlanetNotFound(planet_id).into());
        }

        tracing::info!("Deleted favorited planet {}", planet_id);

        Ok(())
    }

    /// Handles `DELETE /favorites/characters/{id}`.
    ///
    /// Deletes the character row itself, not a link.
    pub async fn remove_character(&self, character_id: i32) -> Result<(), AppError> {
        let deleted = CharacterRepository::new(self.db)
            .delete(character_id)
            .await?;
        if !deleted {
            return Err(ResourceError::CharacterNotFound(character_id).into());
        }

        tracing::info!("Deleted favorited character {}", character_id);

        Ok(())
    }

    /// Replaces every favorite of a user.
    ///
    /// Existing links of both kinds are removed and recreated from the requested ids;
    /// ids that don't resolve are skipped. Runs in a single transaction.
    ///
    /// # Returns
    /// - `Ok(ReplacedFavorites)` - Number of links created per kind
    /// - `Err(AppError::ResourceErr(UserNotFound))` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn replace(
        &self,
        params: ReplaceFavoritesParams,
    ) -> Result<ReplacedFavorites, AppError> {
        self.require_user(params.user_id).await?;

        let user_id = params.user_id;
        let requested = (params.planet_ids.len(), params.character_ids.len());

        let replaced = FavoriteRepository::new(self.db)
            .replace_for_user(params)
            .await?;

        tracing::info!(
            "Replaced favorites of user {}: {}/{} planets, {}/{} characters",
            user_id,
            replaced.planets,
            requested.0,
            replaced.characters,
            requested.1
        );

        Ok(replaced)
    }

    async fn require_user(&self, user_id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        Ok(user)
    }
}
