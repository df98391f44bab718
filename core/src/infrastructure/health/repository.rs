use std::{sync::Arc, time::Instant};

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    async fn probe(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.db.execute_unprepared("SELECT 1").await.map_err(|e| {
            error!("Database health probe failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX))
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        self.probe().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.probe().await?;

        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            database: "postgres".to_string(),
            latency_ms,
        })
    }
}
