use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::User,
    service::avatar::{AvatarService, AVATAR_URL_PREFIX, MAX_AVATAR_BYTES},
};
use std::path::PathBuf;
use test_utils::{builder::TestBuilder, factory};

mod remove;
mod upload;

/// Fresh directory under the system temp dir for one test.
fn avatar_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "catalog-avatars-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn stored_file(dir: &std::path::Path, image: &str) -> PathBuf {
    dir.join(image.strip_prefix(AVATAR_URL_PREFIX).unwrap())
}
