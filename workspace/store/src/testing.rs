use migration::{Migrator, MigratorTrait};
use model::entities::{category, waste_item};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

/// Create an in-memory SQLite database with the full schema applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create an in-memory SQLite database without any tables, so every
/// statement fails.
pub async fn setup_broken_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database")
}

pub const TEST_CATEGORIES: [(i32, &str, &str); 6] = [
    (1, "Furniture", "sofa"),
    (2, "Paper", "newspaper"),
    (3, "Glass", "bottle"),
    (4, "Plastic", "bag"),
    (7, "Electronics", "laptop"),
    (11, "Metal", "can"),
];

pub const TEST_WASTE_ITEMS: [(i32, &str, i32); 7] = [
    (1, "Sofa", 1),
    (2, "Newspaper", 2),
    (3, "Glass bottle", 3),
    (4, "Plastic bag", 4),
    (5, "Jar", 3),
    (6, "Laptop", 7),
    (7, "Tin can", 11),
];

pub async fn seed_reference_data(db: &DatabaseConnection) {
    for (id, name, icon_name) in TEST_CATEGORIES {
        category::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            icon_name: Set(icon_name.to_string()),
        }
        .insert(db)
        .await
        .expect("Failed to create test category");
    }

    for (id, name, category_id) in TEST_WASTE_ITEMS {
        waste_item::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            category_id: Set(category_id),
        }
        .insert(db)
        .await
        .expect("Failed to create test waste item");
    }
}
