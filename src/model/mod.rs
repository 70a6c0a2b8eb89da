//! DTOs shared between the web client and the server API.

pub mod api;
pub mod auth;
pub mod passkey;
pub mod search;
pub mod user;
