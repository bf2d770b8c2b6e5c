pub mod categories;
pub mod health;
pub mod users;
pub mod waste_history;
pub mod waste_records;
