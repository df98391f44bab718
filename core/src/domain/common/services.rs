use crate::domain::{
    consumption_log::ports::ConsumptionLogRepository, food::ports::FoodRepository,
    health::ports::HealthCheckRepository, llm::ports::LLMClient,
    user_preference::ports::UserPreferenceRepository,
};

/// Application service. Every domain service trait is implemented on this
/// struct, generic over the ports it talks to.
#[derive(Clone)]
pub struct Service<F, UP, CL, HC, LLM>
where
    F: FoodRepository,
    UP: UserPreferenceRepository,
    CL: ConsumptionLogRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub(crate) food_repository: F,
    pub(crate) user_preference_repository: UP,
    pub(crate) consumption_log_repository: CL,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
}

impl<F, UP, CL, HC, LLM> Service<F, UP, CL, HC, LLM>
where
    F: FoodRepository,
    UP: UserPreferenceRepository,
    CL: ConsumptionLogRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub fn new(
        food_repository: F,
        user_preference_repository: UP,
        consumption_log_repository: CL,
        health_check_repository: HC,
        llm_client: LLM,
    ) -> Self {
        Self {
            food_repository,
            user_preference_repository,
            consumption_log_repository,
            health_check_repository,
            llm_client,
        }
    }
}
