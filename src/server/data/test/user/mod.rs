use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateProfileParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod activate;
mod create;
mod email_exists;
mod find_by_login;
mod update_profile;
