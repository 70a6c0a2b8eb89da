use crate::server::{
    data::passkey::PasskeyRepository,
    model::passkey::{CreatePasskeyParam, PasskeyUsageParam},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod record_usage;
mod rename;
