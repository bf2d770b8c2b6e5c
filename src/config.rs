use anyhow::{Context, Result};
use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, Environment, builder::DefaultState};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use sea_orm::Database;
use serde::Deserialize;

use crate::schemas::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://127.0.0.1:5173";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://wastetrack.db?mode=rwc";

/// Characters that cannot appear raw in the user or password of a URL.
const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Runtime settings, read from the environment (and a `.env` file if present).
///
/// `DATABASE_URL` wins when set. Otherwise the `MYSQL_*` variables are
/// assembled into a MySQL URL, and without them a local SQLite file is used.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: Option<String>,
    pub mysql_host: Option<String>,
    pub mysql_user: Option<String>,
    pub mysql_password: Option<String>,
    pub mysql_database: Option<String>,
    /// Format: IP:PORT (e.g., 0.0.0.0:8080)
    pub bind_address: String,
    /// The single origin allowed to make cross-origin requests.
    pub allowed_origin: String,
}

impl Settings {
    /// Load settings from environment variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_builder(Self::builder()?.add_source(Environment::default()))
    }

    /// Builder pre-filled with the defaults, before any source is added.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("allowed_origin", DEFAULT_ALLOWED_ORIGIN)?)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        match (&self.mysql_host, &self.mysql_user, &self.mysql_database) {
            (Some(host), Some(user), Some(database)) => {
                let user = utf8_percent_encode(user, USERINFO);
                let password = self.mysql_password.as_deref().unwrap_or_default();
                let password = utf8_percent_encode(password, USERINFO);
                format!("mysql://{user}:{password}@{host}/{database}")
            }
            _ => DEFAULT_DATABASE_URL.to_string(),
        }
    }

    pub fn allowed_origin(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.allowed_origin)
            .with_context(|| format!("Invalid allowed origin: {}", self.allowed_origin))
    }
}

/// Connect to the database and build the state shared by all handlers.
pub async fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    let allowed_origin = settings.allowed_origin()?;

    tracing::info!("Connecting to database");
    let db = Database::connect(settings.database_url())
        .await
        .context("Failed to connect to database")?;

    Ok(AppState { db, allowed_origin })
}
