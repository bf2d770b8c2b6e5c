//! This file serves as the root for all SeaORM entity modules.
//! The tables mirror the waste-tracking schema: accounts, the category and
//! waste item reference data, and the two per-user history tables.

pub mod account;
pub mod bulk_waste_history;
pub mod category;
pub mod common_waste_history;
pub mod waste_item;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::bulk_waste_history::Entity as BulkWasteHistory;
    pub use super::category::Entity as Category;
    pub use super::common_waste_history::Entity as CommonWasteHistory;
    pub use super::waste_item::Entity as WasteItem;
}
