use crate::server::{
    data::email_confirmation_token::EmailConfirmationTokenRepository,
    model::token::CreateTokenParam,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_user;
mod delete_expired;
