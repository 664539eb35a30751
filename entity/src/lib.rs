//! SeaORM entity models for the holocron schema.

pub mod prelude;

pub mod character;
pub mod fav_character;
pub mod fav_planet;
pub mod planet;
pub mod user;
