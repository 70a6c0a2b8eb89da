//! Server-side API backend and business logic.
//!
//! This module contains the backend-for-frontend of the catalog: account management
//! against the legacy database, OAuth and passkey login, and JSON proxies to the
//! Elasticsearch cluster and the external REST API. The backend uses Axum as the web
//! framework, SeaORM for database operations and reqwest for upstream calls.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Upstreams
//!
//! - **Search** (`search/`) - Index settings, query building and the cached index connectors
//! - **REST** (`rest/`) - Dataset features, qualities and statistics
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, etc.)
//! - **Startup** (`startup`) - Initialization of database, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Hourly cleanup of stale account tokens
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session user where the handler requires one
//! 3. **Controller** converts DTOs to params and calls a service
//! 4. **Service** validates input, calls repositories or upstream clients
//! 5. **Controller** converts the domain model to a DTO and responds
//!
//! Errors at any step become `AppError` and are rendered as `{"error": "..."}`.
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod rest;
pub mod router;
pub mod scheduler;
pub mod search;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
