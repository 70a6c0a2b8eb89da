use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored passkey record could not be deserialized.
    #[error("Stored passkey {passkey_id} is unreadable: {reason}")]
    CorruptPasskey {
        /// Row id of the passkey
        passkey_id: i32,
        /// Deserialization failure
        reason: String,
    },
}
