//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! the entity types out of the service layer. All queries, inserts and deletes are
//! performed through these repositories.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
