use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{
        email_confirmation_token::EmailConfirmationTokenRepository,
        password_reset_token::PasswordResetTokenRepository,
    },
    error::AppError,
};

/// Starts the token cleanup scheduler
///
/// Runs at the start of every hour and removes:
/// - Email confirmation tokens past their expiry
/// - Password reset tokens that expired or were used
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match cleanup_tokens(&db, Utc::now()).await {
                Ok((confirmations, resets)) if confirmations + resets > 0 => tracing::info!(
                    "Removed {} confirmation and {} password reset tokens",
                    confirmations,
                    resets
                ),
                Ok(_) => {}
                Err(e) => tracing::error!("Error cleaning up account tokens: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Token cleanup scheduler started");

    Ok(())
}

/// Deletes stale tokens and returns how many of each kind were removed.
pub async fn cleanup_tokens(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<(u64, u64), AppError> {
    let confirmations = EmailConfirmationTokenRepository::new(db)
        .delete_expired(now)
        .await?;
    let resets = PasswordResetTokenRepository::new(db)
        .delete_expired_or_used(now)
        .await?;

    Ok((confirmations, resets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests one cleanup run over a mix of tokens.
    ///
    /// Expected: Ok((1, 2)) with only the valid tokens left
    #[tokio::test]
    async fn removes_only_stale_tokens() -> Result<(), AppError> {
        let test = TestBuilder::new().with_account_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;

        let valid_confirmation =
            factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
                .build()
                .await?;
        factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
            .expired()
            .build()
            .await?;

        let valid_reset = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
            .build()
            .await?;
        factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
            .expired()
            .build()
            .await?;
        factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
            .used()
            .build()
            .await?;

        let removed = cleanup_tokens(db, Utc::now()).await?;
        assert_eq!(removed, (1, 2));

        assert!(EmailConfirmationTokenRepository::new(db)
            .find_by_token(&valid_confirmation.token)
            .await?
            .is_some());
        assert!(PasswordResetTokenRepository::new(db)
            .find_by_token(&valid_reset.token)
            .await?
            .is_some());

        Ok(())
    }
}
