use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consumption_log::{
        entities::ConsumptionLog,
        ports::{ConsumptionLogRepository, ConsumptionLogService},
        value_objects::{
            CreateConsumptionLogInput, DEFAULT_LOG_LIMIT, DEFAULT_SERVINGS,
            GetConsumptionLogsFilter,
        },
    },
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    user_preference::ports::UserPreferenceRepository,
};

impl<F, UP, CL, HC, LLM> ConsumptionLogService for Service<F, UP, CL, HC, LLM>
where
    F: FoodRepository,
    UP: UserPreferenceRepository,
    CL: ConsumptionLogRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn log_consumption(
        &self,
        input: CreateConsumptionLogInput,
    ) -> Result<ConsumptionLog, CoreError> {
        let servings = input.servings.unwrap_or(DEFAULT_SERVINGS);
        if !servings.is_finite() || servings <= 0.0 {
            return Err(CoreError::Invalid);
        }

        // The referenced food must exist
        self.food_repository
            .get_by_id(input.food_id.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let log = ConsumptionLog::new(input.food_id, servings, input.notes);
        debug!("Logging consumption {} of food {}", log.id, log.food_id);

        self.consumption_log_repository.create_log(log).await
    }

    async fn get_logs(
        &self,
        mut filter: GetConsumptionLogsFilter,
    ) -> Result<Vec<ConsumptionLog>, CoreError> {
        filter.limit = Some(filter.limit.unwrap_or(DEFAULT_LOG_LIMIT));
        self.consumption_log_repository.list_logs(filter).await
    }
}
