//! Database repository layer for the legacy account tables.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. All queries, inserts, updates and
//! deletes on `users`, the token tables and `passkeys` go through these repositories.

pub mod email_confirmation_token;
pub mod passkey;
pub mod password_reset_token;
pub mod user;

#[cfg(test)]
mod test;
