use sea_orm::entity::prelude::*;

/// A registered user account.
///
/// `email` is the login identity. The password is kept as entered and compared
/// verbatim by the credential lookup.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    /// Always `"activated"` for accounts created through registration.
    pub activation_code: String,
    /// Always `"diy"` for accounts created through registration.
    pub admin: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
