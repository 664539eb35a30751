use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;
use super::m20250301_000003_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(FavCharacter::Id))
                    .col(integer(FavCharacter::UserId))
                    .col(integer(FavCharacter::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fav_character_user_id")
                            .from(FavCharacter::Table, FavCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fav_character_character_id")
                            .from(FavCharacter::Table, FavCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fav_character_user_id")
                    .table(FavCharacter::Table)
                    .col(FavCharacter::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
}
