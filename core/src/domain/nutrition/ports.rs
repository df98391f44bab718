use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::Food,
    llm::entities::UsageStats,
    nutrition::{
        entities::{
            AiStatus, BalanceReport, BalanceScore, CostTips, MealPlan, NutritionGoals,
            Recommendation, SmartRecommendations, SwapSuggestion, TrendReport,
        },
        value_objects::{HealthContext, TrendEntry, TrendPeriod, UserProfile},
    },
    user_preference::entities::UserPreference,
};

/// AI-backed nutrition features. Every operation that takes its inputs
/// explicitly is infallible: completion failures resolve to the matching
/// fallback. Only the operations that read stored logs can fail.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn recommend(
        &self,
        preference: UserPreference,
        health: HealthContext,
        catalog: Vec<Food>,
        limit: usize,
    ) -> impl Future<Output = Vec<Recommendation>> + Send;

    fn analyze_meal_balance(
        &self,
        meal_foods: Vec<Food>,
        goals: NutritionGoals,
        meal_type: String,
    ) -> impl Future<Output = BalanceReport> + Send;

    fn suggest_swaps(
        &self,
        current: Food,
        preference: UserPreference,
        catalog: Vec<Food>,
    ) -> impl Future<Output = Vec<SwapSuggestion>> + Send;

    fn calculate_daily_goals(
        &self,
        profile: UserProfile,
        health: HealthContext,
    ) -> impl Future<Output = NutritionGoals> + Send;

    fn generate_meal_plan(
        &self,
        preference: UserPreference,
        health: HealthContext,
        catalog: Vec<Food>,
        days: u32,
    ) -> impl Future<Output = MealPlan> + Send;

    fn analyze_trends(
        &self,
        entries: Vec<TrendEntry>,
        period: TrendPeriod,
    ) -> impl Future<Output = TrendReport> + Send;

    /// Stored logs inside the period window, joined with their foods.
    fn recent_trend_entries(
        &self,
        period: TrendPeriod,
    ) -> impl Future<Output = Result<Vec<TrendEntry>, CoreError>> + Send;

    fn analyze_recent_trends(
        &self,
        period: TrendPeriod,
    ) -> impl Future<Output = Result<TrendReport, CoreError>> + Send;

    fn smart_recommendations(
        &self,
        preference: UserPreference,
        health: HealthContext,
        recent: Vec<TrendEntry>,
        catalog: Vec<Food>,
        limit: usize,
    ) -> impl Future<Output = SmartRecommendations> + Send;

    fn balance_score(
        &self,
        consumed: Vec<Food>,
        goals: NutritionGoals,
    ) -> impl Future<Output = BalanceScore> + Send;

    fn cost_optimization_tips(&self) -> impl Future<Output = CostTips> + Send;

    fn usage_stats(&self) -> UsageStats;

    fn ai_status(&self) -> AiStatus;
}
