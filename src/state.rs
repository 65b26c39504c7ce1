use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::storage::{DiskStorage, FileStorage};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// SeaORM connection pool; each request checks out its own connection
    pub db: DatabaseConnection,
    pub config: Config,
    /// Where uploaded documents go
    pub storage: Arc<dyn FileStorage>,
}

impl AppState {
    /// Connect to PostgreSQL, run migrations and store uploads on disk
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let storage = DiskStorage::new(&config.upload_dir)
            .await
            .map_err(|e| AppStateError::Storage(e.to_string()))?;

        Self::with_storage(config, Arc::new(storage)).await
    }

    /// Create AppState with a custom file storage (for testing)
    pub async fn with_storage(
        config: Config,
        storage: Arc<dyn FileStorage>,
    ) -> Result<Self, AppStateError> {
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(config.database_max_connections)
            .min_connections(1)
            .sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Postgres(e.to_string()))?;

        // Run migrations on the same pool
        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await
            .map_err(|e| AppStateError::Migration(e.to_string()))?;

        Ok(Self {
            db,
            config,
            storage,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("PostgreSQL connection error: {0}")]
    Postgres(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("File storage error: {0}")]
    Storage(String),
}
