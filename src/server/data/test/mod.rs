mod email_confirmation_token;
mod passkey;
mod password_reset_token;
mod user;
