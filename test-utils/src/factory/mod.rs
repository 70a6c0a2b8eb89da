//! Factory methods for creating test data.
//!
//! Each account table has a factory struct for customization and a `create_*`
//! convenience function for quick default creation. Token and passkey factories create
//! their owning user automatically unless one is provided.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ada@example.org")
//!     .active(false)
//!     .build()
//!     .await?;
//!
//! let token = factory::email_confirmation_token::EmailConfirmationTokenFactory::new(&db, user.id)
//!     .expired()
//!     .build()
//!     .await?;
//! ```

pub mod email_confirmation_token;
pub mod helpers;
pub mod passkey;
pub mod password_reset_token;
pub mod user;

pub use email_confirmation_token::create_email_confirmation_token;
pub use passkey::create_passkey;
pub use password_reset_token::create_password_reset_token;
pub use user::create_user;
