//! Access control for handlers that need a logged-in account.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Requirements a handler can place on the session user.
pub enum Permission {
    /// The account's email address has been confirmed.
    ActiveAccount,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The session user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted account
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ActiveAccount => {
                    if !user.active {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Account has not confirmed its email address".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
