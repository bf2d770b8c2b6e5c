#[cfg(test)]
pub mod test_utils {
    use crate::cli::commands::import_reference::{
        CategoryRecord, ReferenceData, WasteItemRecord, insert_reference_data,
    };
    use crate::config::DEFAULT_ALLOWED_ORIGIN;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::http::HeaderValue;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};
    use tracing_subscriber::EnvFilter;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Categories 2, 3 and 11 are common waste, 1 and 7 are bulk.
    fn test_reference_data() -> ReferenceData {
        let categories = [
            (1, "Furniture", "sofa"),
            (2, "Paper", "newspaper"),
            (3, "Glass", "bottle"),
            (7, "Electronics", "laptop"),
            (11, "Metal", "can"),
        ];
        let waste_items = [
            (1, "Sofa", 1),
            (2, "Newspaper", 2),
            (3, "Glass bottle", 3),
            (5, "Jar", 3),
            (6, "Laptop", 7),
            (7, "Tin can", 11),
        ];

        ReferenceData {
            categories: categories
                .into_iter()
                .map(|(id, name, icon_name)| CategoryRecord {
                    id,
                    name: name.to_string(),
                    icon_name: icon_name.to_string(),
                })
                .collect(),
            waste_items: waste_items
                .into_iter()
                .map(|(id, name, category_id)| WasteItemRecord {
                    id,
                    name: name.to_string(),
                    category_id,
                })
                .collect(),
        }
    }

    fn test_app_state(db: DatabaseConnection) -> AppState {
        AppState {
            db,
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        }
    }

    /// Route test logs through the test writer. The log level is taken from
    /// RUST_LOG and defaults to WARN.
    fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    }

    /// Create axum app for testing, along with a handle on its database
    pub async fn setup_test_app_with_db() -> (Router, DatabaseConnection) {
        init_test_tracing();

        let db = setup_test_db().await;
        insert_reference_data(&db, test_reference_data())
            .await
            .expect("Failed to seed reference data");

        (create_router(test_app_state(db.clone())), db)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let (router, _db) = setup_test_app_with_db().await;
        router
    }

    /// Create an app whose database has no tables, so every query fails
    pub async fn setup_failing_app() -> Router {
        init_test_tracing();

        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        create_router(test_app_state(db))
    }
}
