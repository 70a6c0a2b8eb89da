//! Avatar uploads stored on local disk and served under `/avatars`.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::path::Path;

use crate::server::{
    data::user::UserRepository, error::AppError, model::user::User,
    util::token::generate_random_code,
};

/// Largest accepted upload.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// Public URL prefix of stored avatars.
pub const AVATAR_URL_PREFIX: &str = "/avatars/";

/// File extension for an accepted image content type.
pub fn avatar_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

pub struct AvatarService<'a> {
    pub db: &'a DatabaseConnection,
    pub avatar_dir: &'a Path,
}

impl<'a> AvatarService<'a> {
    pub fn new(db: &'a DatabaseConnection, avatar_dir: &'a Path) -> Self {
        Self { db, avatar_dir }
    }

    /// Stores a new avatar and removes the previous one.
    ///
    /// # Arguments
    /// - `user` - Account the avatar belongs to
    /// - `content_type` - Content type of the uploaded part
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(User)` - Account with `image` pointing at the new file
    /// - `Err(AppError::BadRequest(_))` - Unsupported type, empty or too large
    /// - `Err(AppError::IoErr(_))` - File could not be written
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn upload(
        &self,
        user: User,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<User, AppError> {
        let Some(extension) = avatar_extension(content_type) else {
            return Err(AppError::BadRequest(
                "Avatar must be a PNG, JPEG, GIF or WebP image".to_string(),
            ));
        };

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Avatar file is empty".to_string()));
        }

        if bytes.len() > MAX_AVATAR_BYTES {
            return Err(AppError::BadRequest(
                "Avatar must be at most 2 MB".to_string(),
            ));
        }

        let file_name = format!(
            "{}-{}-{}.{}",
            user.id,
            Utc::now().timestamp(),
            generate_random_code(8),
            extension
        );
        let path = self.avatar_dir.join(&file_name);
        tokio::fs::write(&path, bytes).await?;

        let image = format!("{}{}", AVATAR_URL_PREFIX, file_name);
        let user_repo = UserRepository::new(self.db);
        if let Err(e) = user_repo.set_image(user.id, Some(image.clone())).await {
            if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                tracing::warn!("Failed to remove avatar {}: {}", path.display(), remove_err);
            }
            return Err(e.into());
        }

        self.remove_file(user.image.as_deref()).await;

        Ok(User {
            image: Some(image),
            ..user
        })
    }

    /// Removes the avatar file and clears `image`.
    pub async fn remove(&self, user: &User) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo.set_image(user.id, None).await?;

        self.remove_file(user.image.as_deref()).await;

        Ok(())
    }

    /// Deletes a stored avatar file.
    ///
    /// Only plain file names under the avatar URL prefix are touched; images pointing
    /// elsewhere (legacy external URLs) are left alone. A missing file is not an error.
    async fn remove_file(&self, image: Option<&str>) {
        let Some(file_name) = image.and_then(|image| image.strip_prefix(AVATAR_URL_PREFIX))
        else {
            return;
        };

        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.')
        {
            return;
        }

        let path = self.avatar_dir.join(file_name);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove avatar {}: {}", path.display(), e);
            }
        }
    }
}
