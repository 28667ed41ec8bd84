//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    db: Option<Db>,
}

impl AppContext {
    /// Build an application context around an already constructed products service.
    ///
    /// The context owns no database handle, so [`AppContext::close`] is a no-op.
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products, db: None }
    }

    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        info!(max_connections, "database ready");

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            db: Some(db),
        })
    }

    /// Close the connection pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.pool().close().await;
        }
    }
}
