//! Small helpers shared by services and middleware.

pub mod parse;
pub mod password;
pub mod token;
pub mod validate;
