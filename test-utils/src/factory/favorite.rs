//! Favorite link factories.
//!
//! Inserts `fav_planet` and `fav_character` rows. The referenced user and target rows
//! must already exist since the tables enforce foreign keys.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite link between a user and a planet.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the owning user
/// - `planet_id` - Id of the favorited planet
///
/// # Returns
/// - `Ok(entity::fav_planet::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert, including foreign key violations
pub async fn create_fav_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::fav_planet::Model, DbErr> {
    entity::fav_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a favorite link between a user and a character.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the owning user
/// - `character_id` - Id of the favorited character
///
/// # Returns
/// - `Ok(entity::fav_character::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert, including foreign key violations
pub async fn create_fav_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::fav_character::Model, DbErr> {
    entity::fav_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
