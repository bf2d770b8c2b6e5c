use thiserror::Error;

/// Error types for the query layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database rejected or failed to execute a statement
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type Result<T> = std::result::Result<T, StoreError>;
