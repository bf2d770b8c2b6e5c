use chrono::Utc;
use model::entities::{bulk_waste_history, common_waste_history};
use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, Set, TransactionTrait};
use tracing::{error, info, instrument};

use crate::error::Result;

/// Category ids whose waste is tracked by weight in the common history table.
pub const COMMON_WASTE_CATEGORIES: [i32; 4] = [2, 3, 4, 11];

/// Which history table a waste record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteKind {
    /// Tracked by weight in `common_waste_history`.
    Common,
    /// Counted in units in `bulk_waste_history`.
    Bulk,
}

impl WasteKind {
    /// Route a category to its history table. Only the ids in
    /// [`COMMON_WASTE_CATEGORIES`] are common waste.
    pub fn for_category(category_id: i32) -> Self {
        if COMMON_WASTE_CATEGORIES.contains(&category_id) {
            WasteKind::Common
        } else {
            WasteKind::Bulk
        }
    }
}

/// A waste disposal to be logged for a user.
#[derive(Debug, Clone)]
pub struct NewWasteRecord {
    pub username: String,
    pub waste_item_id: i32,
    /// Stored as `weight` for common waste and as `units` for bulk waste.
    pub quantity: f64,
    pub category_id: i32,
}

/// Append a record to the history table chosen by its category.
///
/// Returns `false` instead of an error when anything goes wrong; the failure
/// is logged and the transaction rolled back.
#[instrument(
    skip(db, record),
    fields(username = %record.username, category_id = record.category_id)
)]
pub async fn create_waste_record(db: &DatabaseConnection, record: NewWasteRecord) -> bool {
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(e) => {
            error!("Failed to start waste record transaction: {}", e);
            return false;
        }
    };

    let kind = WasteKind::for_category(record.category_id);
    if let Err(e) = insert_record(&txn, kind, record).await {
        error!("Failed to insert waste record, rolling back: {}", e);
        if let Err(rollback_err) = txn.rollback().await {
            error!("Failed to roll back waste record: {}", rollback_err);
        }
        return false;
    }

    match txn.commit().await {
        Ok(()) => {
            info!("Waste record added to {:?} history", kind);
            true
        }
        Err(e) => {
            error!("Failed to commit waste record: {}", e);
            false
        }
    }
}

async fn insert_record(
    txn: &DatabaseTransaction,
    kind: WasteKind,
    record: NewWasteRecord,
) -> Result<()> {
    let modified_date = Utc::now().naive_utc();

    match kind {
        WasteKind::Common => {
            common_waste_history::Entity::insert(common_waste_history::ActiveModel {
                username: Set(record.username),
                waste_item_id: Set(record.waste_item_id),
                weight: Set(record.quantity),
                modified_date: Set(modified_date),
                ..Default::default()
            })
            .exec(txn)
            .await?;
        }
        WasteKind::Bulk => {
            bulk_waste_history::Entity::insert(bulk_waste_history::ActiveModel {
                username: Set(record.username),
                waste_item_id: Set(record.waste_item_id),
                units: Set(record.quantity),
                modified_date: Set(modified_date),
                ..Default::default()
            })
            .exec(txn)
            .await?;
        }
    }

    Ok(())
}
