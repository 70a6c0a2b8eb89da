//! Background jobs.

pub mod token_cleanup;
