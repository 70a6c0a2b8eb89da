//! SeaORM entities for the legacy account tables.
//!
//! The schema of these tables is owned by the legacy account system; columns and types
//! mirror what is already deployed so both systems can read and write the same rows.

pub mod prelude;

pub mod email_confirmation_token;
pub mod passkey;
pub mod password_reset_token;
pub mod user;
