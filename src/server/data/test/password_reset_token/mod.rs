use crate::server::data::password_reset_token::PasswordResetTokenRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_expired_or_used;
mod delete_unused_by_user;
mod mark_used;
