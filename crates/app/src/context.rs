//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database,
    domain::coupons::{CouponApplicationService, CouponsService, repository::PgCouponStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub coupons: Arc<dyn CouponsService>,
}

impl AppContext {
    /// Build application context from a database URL, optionally applying
    /// pending migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        let store = Arc::new(PgCouponStore::new(pool));

        Ok(Self {
            coupons: Arc::new(CouponApplicationService::new(store)),
        })
    }
}
