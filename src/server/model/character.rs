//! Character domain model.

use crate::model::character::CharacterDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
        }
    }
}
