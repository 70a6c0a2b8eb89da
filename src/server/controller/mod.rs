//! HTTP handlers.
//!
//! Controllers resolve the session user where needed, convert DTOs to service
//! parameters and domain models back to DTOs. Every handler is annotated for the
//! OpenAPI document served at `/api/docs`.

pub mod account;
pub mod auth;
pub mod catalog;
pub mod oauth;
pub mod passkey;
pub mod search;
pub mod user;
