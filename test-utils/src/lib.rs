//! Holocron Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the holocron
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for inserting rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert users, planets, characters and favorite links
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_planets() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_favorite_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let planet = factory::planet::create_planet(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
