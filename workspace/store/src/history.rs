//! Per-user waste history.
//!
//! Both tables are left-joined to `wasteitems`, so a record whose item was
//! removed is still returned, with `name` set to `None`.

use model::entities::{bulk_waste_history, common_waste_history, waste_item};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use tracing::{debug, instrument};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CommonHistoryEntry {
    pub waste_item_id: i32,
    pub name: Option<String>,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct BulkHistoryEntry {
    pub waste_item_id: i32,
    pub name: Option<String>,
    pub units: f64,
}

#[instrument(skip(db))]
pub async fn common_history<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Vec<CommonHistoryEntry>> {
    let entries = common_waste_history::Entity::find()
        .select_only()
        .column(common_waste_history::Column::WasteItemId)
        .column_as(waste_item::Column::Name, "name")
        .column(common_waste_history::Column::Weight)
        .join(
            JoinType::LeftJoin,
            common_waste_history::Relation::WasteItem.def(),
        )
        .filter(common_waste_history::Column::Username.eq(username))
        .order_by_asc(common_waste_history::Column::Id)
        .into_model::<CommonHistoryEntry>()
        .all(db)
        .await?;

    debug!("Retrieved {} common history entries", entries.len());
    Ok(entries)
}

#[instrument(skip(db))]
pub async fn bulk_history<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Vec<BulkHistoryEntry>> {
    let entries = bulk_waste_history::Entity::find()
        .select_only()
        .column(bulk_waste_history::Column::WasteItemId)
        .column_as(waste_item::Column::Name, "name")
        .column(bulk_waste_history::Column::Units)
        .join(
            JoinType::LeftJoin,
            bulk_waste_history::Relation::WasteItem.def(),
        )
        .filter(bulk_waste_history::Column::Username.eq(username))
        .order_by_asc(bulk_waste_history::Column::Id)
        .into_model::<BulkHistoryEntry>()
        .all(db)
        .await?;

    debug!("Retrieved {} bulk history entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seed_reference_data, setup_broken_db, setup_test_db};
    use chrono::NaiveDate;
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

    fn logged_at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    async fn log_common(db: &DatabaseConnection, username: &str, waste_item_id: i32, weight: f64) {
        common_waste_history::ActiveModel {
            username: Set(username.to_string()),
            waste_item_id: Set(waste_item_id),
            weight: Set(weight),
            modified_date: Set(logged_at()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    async fn log_bulk(db: &DatabaseConnection, username: &str, waste_item_id: i32, units: f64) {
        bulk_waste_history::ActiveModel {
            username: Set(username.to_string()),
            waste_item_id: Set(waste_item_id),
            units: Set(units),
            modified_date: Set(logged_at()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_no_history_is_empty() {
        let db = setup_test_db().await;
        seed_reference_data(&db).await;

        assert!(common_history(&db, "nobody").await.unwrap().is_empty());
        assert!(bulk_history(&db, "nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_common_history_returns_each_row_for_user() {
        let db = setup_test_db().await;
        seed_reference_data(&db).await;

        log_common(&db, "a", 3, 1.5).await;
        log_common(&db, "a", 5, 2.5).await;
        log_common(&db, "a", 3, 0.5).await;
        log_common(&db, "b", 2, 9.0).await;

        let entries = common_history(&db, "a").await.unwrap();
        assert_eq!(
            entries,
            vec![
                CommonHistoryEntry {
                    waste_item_id: 3,
                    name: Some("Glass bottle".to_string()),
                    weight: 1.5,
                },
                CommonHistoryEntry {
                    waste_item_id: 5,
                    name: Some("Jar".to_string()),
                    weight: 2.5,
                },
                CommonHistoryEntry {
                    waste_item_id: 3,
                    name: Some("Glass bottle".to_string()),
                    weight: 0.5,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_item_yields_null_name() {
        let db = setup_test_db().await;
        seed_reference_data(&db).await;

        log_bulk(&db, "a", 1, 1.0).await;
        log_bulk(&db, "a", 404, 3.0).await;

        let entries = bulk_history(&db, "a").await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name.as_deref(), Some("Sofa"));
        assert_eq!(entries[1].waste_item_id, 404);
        assert_eq!(entries[1].name, None);
        assert_eq!(entries[1].units, 3.0);
    }

    #[tokio::test]
    async fn test_history_failures_are_errors() {
        let db = setup_broken_db().await;

        assert!(common_history(&db, "a").await.is_err());
        assert!(bulk_history(&db, "a").await.is_err());
    }
}
