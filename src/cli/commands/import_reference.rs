use anyhow::{Context, Result};
use model::entities::{category, waste_item};
use sea_orm::{ConnectionTrait, Database, EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, trace};

/// Reference data file: every category and waste item the API serves.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub waste_items: Vec<WasteItemRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: i32,
    pub name: String,
    pub icon_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WasteItemRecord {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

pub async fn import_reference(json_path: &str, database_url: &str) -> Result<()> {
    trace!("Entering import_reference function");
    info!("Starting reference data import");
    debug!("JSON path: {}", json_path);

    let data = read_reference_file(Path::new(json_path))?;
    info!(
        "Loaded {} categories and {} waste items",
        data.categories.len(),
        data.waste_items.len()
    );

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let txn = db.begin().await?;
    insert_reference_data(&txn, data).await?;
    txn.commit().await.context("Failed to commit reference data")?;

    info!("Reference data import completed successfully!");
    Ok(())
}

pub fn read_reference_file(path: &Path) -> Result<ReferenceData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    serde_json::from_reader(file).context("Failed to parse JSON")
}

/// Insert categories first, then the items that point at them.
pub async fn insert_reference_data<C: ConnectionTrait>(
    conn: &C,
    data: ReferenceData,
) -> Result<()> {
    for record in data.categories {
        debug!("Importing category {} ({})", record.id, record.name);
        category::Entity::insert(category::ActiveModel {
            id: Set(record.id),
            name: Set(record.name),
            icon_name: Set(record.icon_name),
        })
        .exec(conn)
        .await
        .with_context(|| format!("Failed to import category {}", record.id))?;
    }

    for record in data.waste_items {
        debug!("Importing waste item {} ({})", record.id, record.name);
        waste_item::Entity::insert(waste_item::ActiveModel {
            id: Set(record.id),
            name: Set(record.name),
            category_id: Set(record.category_id),
        })
        .exec(conn)
        .await
        .with_context(|| format!("Failed to import waste item {}", record.id))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REFERENCE_JSON: &str = r#"{
        "categories": [
            {"id": 3, "name": "Glass", "icon_name": "bottle"},
            {"id": 7, "name": "Electronics", "icon_name": "laptop"}
        ],
        "waste_items": [
            {"id": 5, "name": "Jar", "category_id": 3},
            {"id": 6, "name": "Laptop", "category_id": 7}
        ]
    }"#;

    #[test]
    fn test_read_reference_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REFERENCE_JSON.as_bytes()).unwrap();

        let data = read_reference_file(file.path()).unwrap();
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.categories[1].icon_name, "laptop");
        assert_eq!(data.waste_items[0].category_id, 3);
    }

    #[test]
    fn test_read_reference_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"categories\": [").unwrap();

        assert!(read_reference_file(file.path()).is_err());
    }

    #[tokio::test]
    async fn test_import_reference_into_database() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REFERENCE_JSON.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let database_url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("reference.db").display()
        );

        crate::cli::commands::init_database(&database_url).await.unwrap();
        import_reference(file.path().to_str().unwrap(), &database_url)
            .await
            .unwrap();

        let db = Database::connect(&database_url).await.unwrap();
        let items = store::waste_items_by_category(&db, 3).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Jar");
        assert_eq!(store::list_categories(&db).await.unwrap().len(), 2);
    }
}
