use std::collections::HashSet;

use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consumption_log::{ports::ConsumptionLogRepository, value_objects::GetConsumptionLogsFilter},
    food::{entities::Food, ports::FoodRepository},
    health::ports::HealthCheckRepository,
    llm::{entities::UsageStats, ports::LLMClient},
    nutrition::{
        entities::{
            AiServiceStatus, AiStatus, BalanceReport, BalanceScore, CostTips, MealPlan,
            NutritionGoals, Recommendation, SmartRecommendations, SwapSuggestion, TrendReport,
        },
        fallback,
        orchestrator::resolve,
        ports::NutritionService,
        tasks::{
            CostTipsTask, DailyGoalsTask, MealBalanceTask, MealPlanTask, RecommendTask,
            SmartRecommendTask, SwapTask, TrendTask,
        },
        value_objects::{HealthContext, TrendEntry, TrendPeriod, UserProfile},
    },
    user_preference::{entities::UserPreference, ports::UserPreferenceRepository},
};

pub const AI_FEATURES: [&str; 5] = [
    "food_recommendations",
    "nutrition_analysis",
    "meal_planning",
    "trend_analysis",
    "cost_optimization",
];

const SMART_REASONING: &str = "Based on recent consumption patterns and health context";

impl<F, UP, CL, HC, LLM> NutritionService for Service<F, UP, CL, HC, LLM>
where
    F: FoodRepository,
    UP: UserPreferenceRepository,
    CL: ConsumptionLogRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn recommend(
        &self,
        preference: UserPreference,
        health: HealthContext,
        catalog: Vec<Food>,
        limit: usize,
    ) -> Vec<Recommendation> {
        let task = RecommendTask {
            preference: &preference,
            health: &health,
            catalog: &catalog,
            limit,
        };
        resolve(&self.llm_client, &task).await
    }

    async fn analyze_meal_balance(
        &self,
        meal_foods: Vec<Food>,
        goals: NutritionGoals,
        meal_type: String,
    ) -> BalanceReport {
        let task = MealBalanceTask {
            totals: fallback::meal_totals(&meal_foods),
            goals: &goals,
            meal_type: &meal_type,
        };
        resolve(&self.llm_client, &task).await
    }

    async fn suggest_swaps(
        &self,
        current: Food,
        preference: UserPreference,
        catalog: Vec<Food>,
    ) -> Vec<SwapSuggestion> {
        let task = SwapTask {
            current: &current,
            preference: &preference,
            catalog: &catalog,
        };
        resolve(&self.llm_client, &task).await
    }

    async fn calculate_daily_goals(
        &self,
        profile: UserProfile,
        health: HealthContext,
    ) -> NutritionGoals {
        let task = DailyGoalsTask {
            profile: &profile,
            health: &health,
        };
        resolve(&self.llm_client, &task).await
    }

    async fn generate_meal_plan(
        &self,
        preference: UserPreference,
        health: HealthContext,
        catalog: Vec<Food>,
        days: u32,
    ) -> MealPlan {
        let task = MealPlanTask {
            preference: &preference,
            health: &health,
            catalog: &catalog,
            days,
        };
        resolve(&self.llm_client, &task).await
    }

    async fn analyze_trends(&self, entries: Vec<TrendEntry>, period: TrendPeriod) -> TrendReport {
        let task = TrendTask {
            totals: fallback::period_totals(&entries),
            period,
        };
        resolve(&self.llm_client, &task).await
    }

    async fn recent_trend_entries(&self, period: TrendPeriod) -> Result<Vec<TrendEntry>, CoreError> {
        let logs = self
            .consumption_log_repository
            .list_logs(GetConsumptionLogsFilter {
                limit: None,
                consumed_after: Some(Utc::now() - period.window()),
            })
            .await?;

        let food_ids: Vec<String> = logs
            .iter()
            .map(|log| log.food_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let foods = self.food_repository.get_by_ids(food_ids).await?;

        // Logs whose food has since disappeared are skipped
        Ok(logs
            .into_iter()
            .filter_map(|log| {
                let food = foods.iter().find(|food| food.id == log.food_id)?;
                Some(TrendEntry {
                    food: food.clone(),
                    date: log.consumed_at.date_naive(),
                    servings: log.servings,
                })
            })
            .collect())
    }

    async fn analyze_recent_trends(&self, period: TrendPeriod) -> Result<TrendReport, CoreError> {
        let entries = self.recent_trend_entries(period).await?;
        Ok(self.analyze_trends(entries, period).await)
    }

    async fn smart_recommendations(
        &self,
        preference: UserPreference,
        health: HealthContext,
        recent: Vec<TrendEntry>,
        catalog: Vec<Food>,
        limit: usize,
    ) -> SmartRecommendations {
        let trend_insights = if recent.is_empty() {
            None
        } else {
            Some(self.analyze_trends(recent, TrendPeriod::Week).await)
        };

        let task = SmartRecommendTask {
            preference: &preference,
            health: &health,
            insights: trend_insights.as_ref(),
            catalog: &catalog,
            limit,
        };
        let recommendations = resolve(&self.llm_client, &task).await;

        SmartRecommendations {
            recommendations,
            trend_insights,
            reasoning: SMART_REASONING.to_string(),
        }
    }

    async fn balance_score(&self, consumed: Vec<Food>, goals: NutritionGoals) -> BalanceScore {
        self.analyze_meal_balance(consumed, goals, "daily".to_string())
            .await
            .into()
    }

    async fn cost_optimization_tips(&self) -> CostTips {
        resolve(&self.llm_client, &CostTipsTask).await
    }

    fn usage_stats(&self) -> UsageStats {
        self.llm_client.usage_stats()
    }

    fn ai_status(&self) -> AiStatus {
        let usage = self.llm_client.usage_stats();

        AiStatus {
            status: if usage.ai_enabled {
                AiServiceStatus::Active
            } else {
                AiServiceStatus::Disabled
            },
            usage,
            features_enabled: AI_FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        consumption_log::{entities::ConsumptionLog, ports::MockConsumptionLogRepository},
        food::{
            entities::{Availability, FoodCategory, Macros, PriceTier},
            ports::MockFoodRepository,
        },
        health::ports::MockHealthCheckRepository,
        llm::ports::MockLLMClient,
        nutrition::value_objects::ActivityLevel,
        user_preference::ports::MockUserPreferenceRepository,
    };

    type TestService = Service<
        MockFoodRepository,
        MockUserPreferenceRepository,
        MockConsumptionLogRepository,
        MockHealthCheckRepository,
        MockLLMClient,
    >;

    fn service_with(
        llm_client: MockLLMClient,
        food_repository: MockFoodRepository,
        consumption_log_repository: MockConsumptionLogRepository,
    ) -> TestService {
        Service::new(
            food_repository,
            MockUserPreferenceRepository::new(),
            consumption_log_repository,
            MockHealthCheckRepository::new(),
            llm_client,
        )
    }

    fn service(llm_client: MockLLMClient) -> TestService {
        service_with(
            llm_client,
            MockFoodRepository::new(),
            MockConsumptionLogRepository::new(),
        )
    }

    fn disabled_client() -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client.expect_complete().returning(|_, _| {
            Box::pin(async { Err(CoreError::ServiceUnavailable("no API key provided".to_string())) })
        });
        client
    }

    fn replying_client(reply: &'static str) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client
            .expect_complete()
            .returning(move |_, _| Box::pin(async move { Ok(reply.to_string()) }));
        client
    }

    fn food(n: u32, kcal: u32, protein_g: f64) -> Food {
        Food {
            id: format!("food_{n:03}"),
            name: format!("Food {n}"),
            category: FoodCategory::Bowl,
            tags: vec![],
            macros: Macros {
                protein_g,
                carbs_g: 30.0,
                fat_g: 10.0,
            },
            kcal,
            availability: Availability::default(),
            price_tier: PriceTier::Medium,
        }
    }

    /// Ten foods, three of them above 25 g protein.
    fn catalog_of_ten() -> Vec<Food> {
        let proteins = [10.0, 28.0, 12.0, 40.0, 15.0, 20.0, 33.0, 5.0, 25.0, 18.0];
        proteins
            .iter()
            .enumerate()
            .map(|(i, protein)| food(i as u32 + 1, 350, *protein))
            .collect()
    }

    #[tokio::test]
    async fn disabled_client_recommends_top_protein_foods_for_intense_activity() {
        let service = service(disabled_client());
        let catalog = catalog_of_ten();
        let health = HealthContext {
            activity_level: ActivityLevel::Intense,
            ..HealthContext::default()
        };

        let recs = service
            .recommend(UserPreference::default(), health, catalog.clone(), 2)
            .await;
        let ids: Vec<_> = recs.iter().map(|r| r.food_id.as_str()).collect();

        assert_eq!(ids, vec!["food_004", "food_007"]);
        assert!(recs.iter().all(|r| catalog.iter().any(|f| f.id == r.food_id)));
    }

    #[tokio::test]
    async fn recommendations_never_exceed_limit_or_leave_catalog() {
        let service = service(replying_client(
            r#"[{"food_id": "food_002", "reason": "a", "score": 0.9},
                {"food_id": "ghost", "reason": "b", "score": 0.8},
                {"food_id": "food_003", "reason": "c", "score": 0.7},
                {"food_id": "food_001", "reason": "d", "score": 0.6}]"#,
        ));
        let catalog = catalog_of_ten();

        let recs = service
            .recommend(UserPreference::default(), HealthContext::default(), catalog, 2)
            .await;
        let ids: Vec<_> = recs.iter().map(|r| r.food_id.as_str()).collect();

        assert_eq!(ids, vec!["food_002", "food_003"]);
    }

    #[tokio::test]
    async fn malformed_reply_yields_fallback_meal_balance() {
        let service = service(replying_client("I think this meal is great!"));
        let meal = vec![food(1, 420, 35.0)];
        let goals = NutritionGoals::from_calories(2000, "");

        let report = service
            .analyze_meal_balance(meal.clone(), goals.clone(), "lunch".to_string())
            .await;

        let expected = fallback::meal_balance(&fallback::meal_totals(&meal), &goals);
        assert_eq!(report, expected);
        // 420 / 600 = 0.7 and protein capped at 1.0
        assert!((report.balance_score - 0.85).abs() < 1e-9);
    }

    #[tokio::test]
    async fn daily_goals_fallback_is_deterministic() {
        let service = service(disabled_client());

        let first = service
            .calculate_daily_goals(UserProfile::default(), HealthContext::default())
            .await;
        let second = service
            .calculate_daily_goals(UserProfile::default(), HealthContext::default())
            .await;

        assert_eq!(first.calories, 2507);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn daily_goals_come_from_valid_reply() {
        let service = service(replying_client(
            r#"{"calories": 2300, "protein_g": 140, "carbs_g": 260, "fat_g": 75, "fiber_g": 30, "reasoning": "active"}"#,
        ));

        let goals = service
            .calculate_daily_goals(UserProfile::default(), HealthContext::default())
            .await;

        assert_eq!(goals.calories, 2300);
        assert_eq!(goals.fiber_g, 30);
        assert_eq!(goals.reasoning, "active");
    }

    #[tokio::test]
    async fn meal_plan_with_unknown_food_falls_back() {
        let service = service(replying_client(
            r#"{"day_1": {"breakfast": {"food_id": "food_999", "reason": "x"}}}"#,
        ));
        let catalog = catalog_of_ten();

        let plan = service
            .generate_meal_plan(UserPreference::default(), HealthContext::default(), catalog, 1)
            .await;

        assert_eq!(plan.total_weekly_cost, "$30");
        assert_eq!(plan.days[0].breakfast.as_ref().unwrap().food_id, "food_001");
    }

    #[tokio::test]
    async fn swaps_fall_back_to_lighter_foods() {
        let service = service(disabled_client());
        let current = food(1, 600, 20.0);
        let catalog = vec![current.clone(), food(2, 300, 30.0), food(3, 700, 50.0)];

        let swaps = service
            .suggest_swaps(current, UserPreference::default(), catalog)
            .await;

        assert_eq!(swaps.len(), 1);
        assert_eq!(swaps[0].food_id, "food_002");
    }

    #[tokio::test]
    async fn smart_recommendations_skip_trends_without_logs() {
        let mut client = MockLLMClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok("nothing useful".to_string()) }));
        let service = service(client);

        let result = service
            .smart_recommendations(
                UserPreference::default(),
                HealthContext::default(),
                vec![],
                catalog_of_ten(),
                3,
            )
            .await;

        assert!(result.trend_insights.is_none());
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.recommendations[0].food_id, "food_001");
    }

    #[tokio::test]
    async fn smart_recommendations_feed_trend_concerns_into_prompt() {
        let mut seq = mockall::Sequence::new();
        let mut client = MockLLMClient::new();
        client
            .expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"{"trends": ["steady lunches"], "concerns": ["low fiber intake"],
                        "strengths": [], "recommendations": ["add greens"], "score": 0.4}"#
                        .to_string())
                })
            });
        client
            .expect_complete()
            .withf(|prompt, _| prompt.contains("Concerns: low fiber intake"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"[{"food_id": "food_002", "reason": "More fiber", "score": 0.8}]"#
                        .to_string())
                })
            });
        let service = service(client);

        let recent = vec![TrendEntry {
            food: food(1, 450, 30.0),
            date: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            servings: 1.0,
        }];
        let result = service
            .smart_recommendations(
                UserPreference::default(),
                HealthContext::default(),
                recent,
                catalog_of_ten(),
                3,
            )
            .await;

        let insights = result.trend_insights.expect("trend insights");
        assert_eq!(insights.score, 0.4);
        assert_eq!(insights.concerns, vec!["low fiber intake".to_string()]);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].food_id, "food_002");
        assert_eq!(result.recommendations[0].score, 0.8);
    }

    #[tokio::test]
    async fn balance_score_reports_suggestions_as_improvements() {
        let service = service(replying_client(
            r#"{"balance_score": 0.65, "strengths": ["protein"], "suggestions": ["more fiber"]}"#,
        ));

        let score = service
            .balance_score(vec![food(1, 500, 30.0)], NutritionGoals::default())
            .await;

        assert_eq!(score.balance_score, 0.65);
        assert_eq!(score.improvements, vec!["more fiber".to_string()]);
    }

    #[tokio::test]
    async fn recent_trends_join_logs_with_foods() {
        let mut logs = MockConsumptionLogRepository::new();
        logs.expect_list_logs()
            .withf(|filter| filter.limit.is_none() && filter.consumed_after.is_some())
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![
                        ConsumptionLog::new("food_001".to_string(), 2.0, None),
                        ConsumptionLog::new("gone".to_string(), 1.0, None),
                    ])
                })
            });

        let mut foods = MockFoodRepository::new();
        foods
            .expect_get_by_ids()
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![food(1, 400, 20.0)]) }));

        let service = service_with(disabled_client(), foods, logs);
        let entries = service.recent_trend_entries(TrendPeriod::Week).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].servings, 2.0);

        let totals = fallback::period_totals(&entries);
        assert_eq!(totals.total_calories, 800.0);
    }

    #[tokio::test]
    async fn recent_trends_propagate_storage_errors() {
        let mut logs = MockConsumptionLogRepository::new();
        logs.expect_list_logs()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let service = service_with(disabled_client(), MockFoodRepository::new(), logs);
        let result = service.analyze_recent_trends(TrendPeriod::Day).await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn cost_tips_fall_back_when_disabled() {
        let service = service(disabled_client());
        let tips = service.cost_optimization_tips().await;
        assert_eq!(tips.total_potential_savings, "$25/week");
    }

    #[test]
    fn ai_status_reflects_client_state() {
        let mut client = MockLLMClient::new();
        client.expect_usage_stats().returning(|| UsageStats {
            ai_enabled: false,
            model: "none".to_string(),
            total_tokens: 0,
            total_cost: 0.0,
            request_count: 0,
            average_cost_per_request: 0.0,
        });

        let status = service(client).ai_status();
        assert_eq!(status.status, AiServiceStatus::Disabled);
        assert_eq!(status.features_enabled.len(), AI_FEATURES.len());
    }
}
