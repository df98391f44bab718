use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consumption_log::ports::ConsumptionLogRepository,
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    user_preference::{
        entities::UserPreference,
        ports::{UserPreferenceRepository, UserPreferenceService},
    },
};

impl<F, UP, CL, HC, LLM> UserPreferenceService for Service<F, UP, CL, HC, LLM>
where
    F: FoodRepository,
    UP: UserPreferenceRepository,
    CL: ConsumptionLogRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_preferences(&self) -> Result<UserPreference, CoreError> {
        let preference = self.user_preference_repository.get_preference().await?;

        Ok(preference.unwrap_or_default())
    }

    async fn update_preferences(
        &self,
        mut preference: UserPreference,
    ) -> Result<UserPreference, CoreError> {
        preference.dislikes.retain(|tag| !tag.trim().is_empty());
        self.user_preference_repository
            .upsert_preference(preference)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        consumption_log::ports::MockConsumptionLogRepository,
        food::{entities::PriceTier, ports::MockFoodRepository},
        health::ports::MockHealthCheckRepository,
        llm::ports::MockLLMClient,
        user_preference::{entities::DietStyle, ports::MockUserPreferenceRepository},
    };

    fn service_with(
        repository: MockUserPreferenceRepository,
    ) -> Service<
        MockFoodRepository,
        MockUserPreferenceRepository,
        MockConsumptionLogRepository,
        MockHealthCheckRepository,
        MockLLMClient,
    > {
        Service::new(
            MockFoodRepository::new(),
            repository,
            MockConsumptionLogRepository::new(),
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
        )
    }

    #[tokio::test]
    async fn missing_preference_yields_defaults() {
        let mut repository = MockUserPreferenceRepository::new();
        repository
            .expect_get_preference()
            .returning(|| Box::pin(async { Ok(None) }));

        let preference = service_with(repository).get_preferences().await.unwrap();

        assert_eq!(preference.diet_style, DietStyle::Omnivore);
        assert_eq!(preference.price_ceiling, PriceTier::Medium);
        assert!(preference.dislikes.is_empty());
        assert!(preference.home_area.is_none());
    }

    #[tokio::test]
    async fn update_drops_blank_dislikes() {
        let mut repository = MockUserPreferenceRepository::new();
        repository
            .expect_upsert_preference()
            .withf(|preference| preference.dislikes == vec!["spicy".to_string()])
            .returning(|preference| Box::pin(async move { Ok(preference) }));

        let updated = service_with(repository)
            .update_preferences(UserPreference {
                diet_style: DietStyle::Vegan,
                dislikes: vec!["spicy".to_string(), "  ".to_string()],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.diet_style, DietStyle::Vegan);
    }
}
