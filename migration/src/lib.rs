pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_email_confirmation_tokens_table;
mod m20250301_000003_create_password_reset_tokens_table;
mod m20250412_000004_create_passkeys_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_email_confirmation_tokens_table::Migration),
            Box::new(m20250301_000003_create_password_reset_tokens_table::Migration),
            Box::new(m20250412_000004_create_passkeys_table::Migration),
        ]
    }
}
