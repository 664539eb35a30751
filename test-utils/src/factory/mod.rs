//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let planet = factory::planet::PlanetFactory::new(&db).name("Tatooine").build().await?;
//! factory::create_fav_planet(&db, user.id, planet.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `planet` - Create planet entities
//! - `character` - Create character entities
//! - `favorite` - Create favorite link entities
//! - `helpers` - Unique id generation shared by the factories

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

pub use character::create_character;
pub use favorite::{create_fav_character, create_fav_planet};
pub use planet::create_planet;
pub use user::create_user;
