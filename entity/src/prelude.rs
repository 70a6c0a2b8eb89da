pub use super::email_confirmation_token::Entity as EmailConfirmationToken;
pub use super::passkey::Entity as Passkey;
pub use super::password_reset_token::Entity as PasswordResetToken;
pub use super::user::Entity as User;
