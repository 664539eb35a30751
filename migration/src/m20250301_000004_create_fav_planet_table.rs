use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;
use super::m20250301_000002_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavPlanet::Table)
                    .if_not_exists()
                    .col(pk_auto(FavPlanet::Id))
                    .col(integer(FavPlanet::UserId))
                    .col(integer(FavPlanet::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fav_planet_user_id")
                            .from(FavPlanet::Table, FavPlanet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fav_planet_planet_id")
                            .from(FavPlanet::Table, FavPlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fav_planet_user_id")
                    .table(FavPlanet::Table)
                    .col(FavPlanet::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavPlanet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavPlanet {
    Table,
    Id,
    UserId,
    PlanetId,
}
