use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fav_character::Entity")]
    FavCharacter,
}

impl Related<super::fav_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
