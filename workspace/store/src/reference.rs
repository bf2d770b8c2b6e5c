use model::entities::{category, waste_item};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, instrument};

use crate::error::Result;

/// All waste categories, ordered by id.
#[instrument(skip(db))]
pub async fn list_categories<C: ConnectionTrait>(db: &C) -> Result<Vec<category::Model>> {
    let categories = category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;

    debug!("Retrieved {} categories", categories.len());
    Ok(categories)
}

/// Waste items assigned to `category_id`. An unknown category yields an empty list.
#[instrument(skip(db))]
pub async fn waste_items_by_category<C: ConnectionTrait>(
    db: &C,
    category_id: i32,
) -> Result<Vec<waste_item::Model>> {
    let items = waste_item::Entity::find()
        .filter(waste_item::Column::CategoryId.eq(category_id))
        .order_by_asc(waste_item::Column::Id)
        .all(db)
        .await?;

    debug!("Retrieved {} waste items for category {}", items.len(), category_id);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        seed_reference_data, setup_broken_db, setup_test_db, TEST_CATEGORIES,
    };

    #[tokio::test]
    async fn test_list_categories() {
        let db = setup_test_db().await;
        assert!(list_categories(&db).await.unwrap().is_empty());

        seed_reference_data(&db).await;
        let categories = list_categories(&db).await.unwrap();

        assert_eq!(categories.len(), TEST_CATEGORIES.len());
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].name, "Furniture");
        assert_eq!(categories[0].icon_name, "sofa");
    }

    #[tokio::test]
    async fn test_waste_items_by_category() {
        let db = setup_test_db().await;
        seed_reference_data(&db).await;

        let glass = waste_items_by_category(&db, 3).await.unwrap();
        let names: Vec<&str> = glass.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Glass bottle", "Jar"]);

        assert!(waste_items_by_category(&db, 999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failures_are_errors() {
        let db = setup_broken_db().await;

        assert!(list_categories(&db).await.is_err());
        assert!(waste_items_by_category(&db, 3).await.is_err());
    }
}
