use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fav_character::Entity")]
    FavCharacter,
    #[sea_orm(has_many = "super::fav_planet::Entity")]
    FavPlanet,
}

impl Related<super::fav_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavCharacter.def()
    }
}

impl Related<super::fav_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavPlanet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
