//! Query layer for the waste-tracking API.
//!
//! Every function takes the connection it should run on, so the HTTP layer
//! passes its pooled [`sea_orm::DatabaseConnection`] and tests pass an
//! in-memory SQLite one. Lookups run a single statement on a pooled connection;
//! registration and record creation hold one transaction for their whole
//! sequence.

pub mod accounts;
pub mod error;
pub mod history;
pub mod reference;
pub mod waste;

#[cfg(test)]
pub(crate) mod testing;

pub use accounts::{NewAccount, Registration, find_by_credentials, register_account};
pub use error::{Result, StoreError};
pub use history::{BulkHistoryEntry, CommonHistoryEntry, bulk_history, common_history};
pub use reference::{list_categories, waste_items_by_category};
pub use waste::{COMMON_WASTE_CATEGORIES, NewWasteRecord, WasteKind, create_waste_record};
