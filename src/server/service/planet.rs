use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by id
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a planet by id, None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Deletes a planet along with every favorite link pointing at it
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PlanetRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted planet {}", id);
        }

        Ok(deleted)
    }
}
