use crate::{
    model::user::UpdateProfileDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{UpdateProfileParam, User},
        service::user::UserService,
        util::password::{hash_password, verify_password},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod change_password;
mod update_profile;
