use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository, error::AppError, model::character::Character,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character ordered by id
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a character by id, None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Deletes a character along with every favorite link pointing at it
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CharacterRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted character {}", id);
        }

        Ok(deleted)
    }
}
