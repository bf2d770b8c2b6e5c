use model::entities::account;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::{debug, error, info, instrument};

use crate::error::Result;

/// Activation code stamped on every account created by registration.
pub const ACTIVATION_CODE: &str = "activated";
/// Admin marker stamped on every account created by registration.
pub const DEFAULT_ADMIN: &str = "diy";

/// Caller-supplied fields of a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Outcome of a registration attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    AlreadyExists,
}

/// Look up the account whose email and password both match exactly.
///
/// The password is compared as stored, in plain text.
#[instrument(skip(db, password))]
pub async fn find_by_credentials<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<Option<account::Model>> {
    let account = account::Entity::find()
        .filter(account::Column::Email.eq(email))
        .filter(account::Column::Password.eq(password))
        .one(db)
        .await?;

    debug!("Credential lookup matched: {}", account.is_some());
    Ok(account)
}

pub(crate) async fn account_exists<C: ConnectionTrait>(conn: &C, email: &str) -> Result<bool> {
    let existing = account::Entity::find()
        .filter(account::Column::Email.eq(email))
        .one(conn)
        .await?;

    Ok(existing.is_some())
}

/// Register a new account unless one with the same email already exists.
///
/// The existence check and the insert run in one transaction. Finding an
/// existing account is not an error. Any database failure rolls the
/// transaction back and is returned to the caller.
#[instrument(skip(db, new_account), fields(email = %new_account.email))]
pub async fn register_account(
    db: &DatabaseConnection,
    new_account: NewAccount,
) -> Result<Registration> {
    let txn = db.begin().await?;

    match insert_if_absent(&txn, new_account).await {
        Ok(outcome) => {
            // Also closes the transaction on the already-exists path, where
            // nothing was written and no rollback is issued.
            txn.commit().await?;
            Ok(outcome)
        }
        Err(e) => {
            error!("Registration failed, rolling back: {}", e);
            if let Err(rollback_err) = txn.rollback().await {
                error!("Failed to roll back registration: {}", rollback_err);
            }
            Err(e)
        }
    }
}

async fn insert_if_absent(
    txn: &DatabaseTransaction,
    new_account: NewAccount,
) -> Result<Registration> {
    if account_exists(txn, &new_account.email).await? {
        info!("Account already exists");
        return Ok(Registration::AlreadyExists);
    }

    let result = account::Entity::insert(account::ActiveModel {
        username: Set(new_account.username),
        password: Set(new_account.password),
        email: Set(new_account.email),
        activation_code: Set(ACTIVATION_CODE.to_string()),
        admin: Set(DEFAULT_ADMIN.to_string()),
        ..Default::default()
    })
    .exec(txn)
    .await?;

    info!("Account registered with ID: {}", result.last_insert_id);
    Ok(Registration::Created)
}
