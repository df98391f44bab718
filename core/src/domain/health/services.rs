use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consumption_log::ports::ConsumptionLogRepository,
    food::ports::FoodRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    llm::ports::LLMClient,
    user_preference::ports::UserPreferenceRepository,
};

impl<F, UP, CL, HC, LLM> HealthCheckService for Service<F, UP, CL, HC, LLM>
where
    F: FoodRepository,
    UP: UserPreferenceRepository,
    CL: ConsumptionLogRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
