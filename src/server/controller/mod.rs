//! HTTP request handlers.
//!
//! Controllers extract path and body values, call the matching service, and convert
//! domain models into DTOs for the JSON response.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
