use sea_orm::entity::prelude::*;

/// Legacy user account row.
///
/// `active` is a numeric flag (0 = awaiting email confirmation, 1 = active) and
/// `password` holds a bcrypt hash. Timestamps are unix seconds as stored by the
/// legacy system.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub activation_code: Option<String>,
    pub active: i8,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub country: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub image: Option<String>,
    pub external_source: Option<String>,
    pub created_on: i64,
    pub last_login: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::email_confirmation_token::Entity")]
    EmailConfirmationToken,
    #[sea_orm(has_many = "super::password_reset_token::Entity")]
    PasswordResetToken,
    #[sea_orm(has_many = "super::passkey::Entity")]
    Passkey,
}

impl Related<super::email_confirmation_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailConfirmationToken.def()
    }
}

impl Related<super::password_reset_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PasswordResetToken.def()
    }
}

impl Related<super::passkey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passkey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
