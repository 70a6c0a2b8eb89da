use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailConfirmationTokens::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailConfirmationTokens::Id))
                    .col(integer(EmailConfirmationTokens::UserId))
                    .col(string_uniq(EmailConfirmationTokens::Token))
                    .col(timestamp_with_time_zone(EmailConfirmationTokens::ExpiresAt))
                    .col(timestamp_with_time_zone(EmailConfirmationTokens::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_confirmation_tokens_user_id")
                            .from(
                                EmailConfirmationTokens::Table,
                                EmailConfirmationTokens::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(EmailConfirmationTokens::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmailConfirmationTokens {
    Table,
    Id,
    UserId,
    Token,
    ExpiresAt,
    CreatedAt,
}
