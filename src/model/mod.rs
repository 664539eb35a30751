//! Wire DTOs serialized to and from JSON request and response bodies.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
