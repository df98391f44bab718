use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        consumption_log::{
            entities::ConsumptionLog, ports::ConsumptionLogRepository,
            value_objects::GetConsumptionLogsFilter,
        },
    },
    entity::consumption_logs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresConsumptionLogRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresConsumptionLogRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

impl ConsumptionLogRepository for PostgresConsumptionLogRepository {
    async fn create_log(&self, log: ConsumptionLog) -> Result<ConsumptionLog, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(log.id),
            food_id: Set(log.food_id),
            consumed_at: Set(log.consumed_at.fixed_offset()),
            servings: Set(log.servings),
            notes: Set(log.notes),
        })
        .exec_with_returning(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to create consumption log: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ConsumptionLog::from(created))
    }

    async fn list_logs(
        &self,
        filter: GetConsumptionLogsFilter,
    ) -> Result<Vec<ConsumptionLog>, CoreError> {
        let mut query = Entity::find();

        if let Some(after) = filter.consumed_after {
            query = query.filter(Column::ConsumedAt.gte(after.fixed_offset()));
        }

        query = query.order_by_desc(Column::ConsumedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(u64::from(limit));
        }

        let logs = query
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list consumption logs: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(ConsumptionLog::from)
            .collect();

        Ok(logs)
    }
}
