#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod account;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod catalog;

#[cfg(feature = "web")]
pub mod passkey;

#[cfg(feature = "web")]
pub mod search;

#[cfg(feature = "web")]
pub mod user;
