//! Elasticsearch proxy infrastructure.
//!
//! - `client` - cluster access with a per-index connector cache
//! - `config` - per entity kind indices, search fields, facets and sort options
//! - `query` - request body building and response reshaping

pub mod client;
pub mod config;
pub mod query;
