//! Favorite link repository.
//!
//! Manages the `fav_planet` and `fav_character` link tables. Links are plain rows with no
//! uniqueness constraint, so inserting the same (user, target) pair twice stores two links.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    character::Character,
    favorite::{ReplaceFavoritesParams, ReplacedFavorites},
    planet::Planet,
};

/// Upper bound on ids or rows bound into a single statement.
///
/// SQLite caps bound parameters per statement at 32766.
const CHUNK_SIZE: usize = 1000;

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a link from a user to a planet.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new link row
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<i32, DbErr> {
        let link = entity::fav_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(link.id)
    }

    /// Inserts a link from a user to a character.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new link row
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn add_character(&self, user_id: i32, character_id: i32) -> Result<i32, DbErr> {
        let link = entity::fav_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(link.id)
    }

    /// Gets the planets linked to a user, one entry per link in link id order.
    pub async fn get_planets_by_user(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let links = entity::prelude::FavPlanet::find()
            .filter(entity::fav_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::fav_planet::Column::Id)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await?;

        Ok(links
            .into_iter()
            .filter_map(|(_, planet)| planet.map(Planet::from_entity))
            .collect())
    }

    /// Gets the characters linked to a user, one entry per link in link id order.
    pub async fn get_characters_by_user(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let links = entity::prelude::FavCharacter::find()
            .filter(entity::fav_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::fav_character::Column::Id)
            .find_also_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        Ok(links
            .into_iter()
            .filter_map(|(_, character)| character.map(Character::from_entity))
            .collect())
    }

    /// Replaces every favorite link of a user in a single transaction.
    ///
    /// Deletes all existing planet and character links of the user, then inserts one
    /// link per requested id that resolves to an existing row. Unknown ids are skipped.
    /// Repeated ids produce repeated links.
    ///
    /// # Arguments
    /// - `params` - User id and the requested planet and character ids
    ///
    /// # Returns
    /// - `Ok(ReplacedFavorites)` - Number of links created per kind
    /// - `Err(DbErr)` - Database error; the transaction is rolled back on drop
    pub async fn replace_for_user(
        &self,
        params: ReplaceFavoritesParams,
    ) -> Result<ReplacedFavorites, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::FavPlanet::delete_many()
            .filter(entity::fav_planet::Column::UserId.eq(params.user_id))
            .exec(&txn)
            .await?;
        entity::prelude::FavCharacter::delete_many()
            .filter(entity::fav_character::Column::UserId.eq(params.user_id))
            .exec(&txn)
            .await?;

        let existing_planets = existing_ids::<entity::prelude::Planet, _>(
            &txn,
            entity::planet::Column::Id,
            &params.planet_ids,
        )
        .await?;
        let existing_characters = existing_ids::<entity::prelude::Character, _>(
            &txn,
            entity::character::Column::Id,
            &params.character_ids,
        )
        .await?;

        let planet_links: Vec<entity::fav_planet::ActiveModel> = params
            .planet_ids
            .iter()
            .filter(|id| existing_planets.contains(id))
            .map(|&planet_id| entity::fav_planet::ActiveModel {
                user_id: ActiveValue::Set(params.user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .collect();

        let character_links: Vec<entity::fav_character::ActiveModel> = params
            .character_ids
            .iter()
            .filter(|id| existing_characters.contains(id))
            .map(|&character_id| entity::fav_character::ActiveModel {
                user_id: ActiveValue::Set(params.user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .collect();

        let replaced = ReplacedFavorites {
            planets: planet_links.len(),
            characters: character_links.len(),
        };

        for chunk in planet_links.chunks(CHUNK_SIZE) {
            entity::prelude::FavPlanet::insert_many(chunk.to_vec())
                .exec(&txn)
                .await?;
        }
        for chunk in character_links.chunks(CHUNK_SIZE) {
            entity::prelude::FavCharacter::insert_many(chunk.to_vec())
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(replaced)
    }
}

/// Returns the subset of `ids` that exist in the table of `E`.
///
/// Ids are deduplicated and looked up in chunks of `CHUNK_SIZE`.
async fn existing_ids<E, C>(
    conn: &C,
    id_column: E::Column,
    ids: &[i32],
) -> Result<HashSet<i32>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut requested: Vec<i32> = ids
        .iter()
        .copied()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    requested.sort_unstable();

    let mut existing = HashSet::with_capacity(requested.len());
    for chunk in requested.chunks(CHUNK_SIZE) {
        let found: Vec<i32> = E::find()
            .select_only()
            .column(id_column)
            .filter(id_column.is_in(chunk.iter().copied()))
            .into_tuple()
            .all(conn)
            .await?;
        existing.extend(found);
    }

    Ok(existing)
}
