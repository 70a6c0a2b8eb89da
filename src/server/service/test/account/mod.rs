use crate::server::{
    data::{
        email_confirmation_token::EmailConfirmationTokenRepository,
        password_reset_token::PasswordResetTokenRepository, user::UserRepository,
    },
    error::AppError,
    model::user::RegisterParam,
    service::{account::AccountService, email::EmailService},
    util::password::{hash_password, verify_password},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod confirm_email;
mod forgot_password;
mod register;
mod resend_confirmation;
mod reset_password;

const APP_URL: &str = "http://localhost:8080";

fn email_service() -> EmailService {
    EmailService::log_only("no-reply@localhost")
}
