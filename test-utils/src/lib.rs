//! Catalog Test Utils
//!
//! Provides shared testing utilities for the catalog backend. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases holding the account
//! tables, plus factories for inserting users, tokens and passkeys with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_user() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_account_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
