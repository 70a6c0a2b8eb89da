use sea_orm_migration::{prelude::*, schema::*};

/// Creates the `users` table unless the legacy schema already provides it.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Username))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::Password))
                    .col(string_null(Users::ActivationCode))
                    .col(tiny_integer(Users::Active).default(0))
                    .col(string_null(Users::FirstName))
                    .col(string_null(Users::LastName))
                    .col(string_null(Users::Company))
                    .col(string_null(Users::Country))
                    .col(text_null(Users::Bio))
                    .col(string_null(Users::Image))
                    .col(string_null(Users::ExternalSource))
                    .col(big_integer(Users::CreatedOn))
                    .col(big_integer_null(Users::LastLogin))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
    ActivationCode,
    Active,
    FirstName,
    LastName,
    Company,
    Country,
    Bio,
    Image,
    ExternalSource,
    CreatedOn,
    LastLogin,
}
