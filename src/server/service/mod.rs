//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) and upstream client layers.
//! Services are responsible for:
//!
//! - **Business Logic**: Validation, token lifecycles and login rules
//! - **Orchestration**: Coordinating repository calls, the search cluster, the REST API
//!   and email delivery
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod account;
pub mod auth;
pub mod avatar;
pub mod catalog;
pub mod email;
pub mod oauth;
pub mod passkey;
pub mod search;
pub mod user;

#[cfg(test)]
mod test;
