use std::collections::HashMap;

use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consumption_log::ports::ConsumptionLogRepository,
    food::{
        entities::Food,
        ports::{FoodRepository, FoodService},
        value_objects::GetFoodsFilter,
    },
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    user_preference::ports::UserPreferenceRepository,
};

impl<F, UP, CL, HC, LLM> FoodService for Service<F, UP, CL, HC, LLM>
where
    F: FoodRepository,
    UP: UserPreferenceRepository,
    CL: ConsumptionLogRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_foods(&self, filter: GetFoodsFilter) -> Result<Vec<Food>, CoreError> {
        self.food_repository.list_foods(filter).await
    }

    async fn get_food(&self, food_id: String) -> Result<Food, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_foods_by_ids(&self, food_ids: Vec<String>) -> Result<Vec<Food>, CoreError> {
        let stored: HashMap<String, Food> = self
            .food_repository
            .get_by_ids(food_ids.clone())
            .await?
            .into_iter()
            .map(|food| (food.id.clone(), food))
            .collect();

        food_ids
            .iter()
            .map(|id| stored.get(id).cloned().ok_or(CoreError::NotFound))
            .collect()
    }

    async fn seed_catalog(&self, foods: Vec<Food>) -> Result<u64, CoreError> {
        let total = foods.len();
        let inserted = self.food_repository.insert_missing(foods).await?;
        info!("Seeded {} of {} catalog foods", inserted, total);

        Ok(inserted)
    }
}
