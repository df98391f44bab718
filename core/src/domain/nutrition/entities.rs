use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::llm::entities::UsageStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub food_id: String,
    pub reason: String,
    /// Relevance in `[0, 1]`.
    pub score: f64,
}

/// Summed nutrition of a set of foods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BalanceReport {
    pub balance_score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub next_meal_focus: String,
}

/// Day-level projection of a [`BalanceReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BalanceScore {
    pub balance_score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_meal_focus: String,
}

impl From<BalanceReport> for BalanceScore {
    fn from(report: BalanceReport) -> Self {
        Self {
            balance_score: report.balance_score,
            strengths: report.strengths,
            improvements: report.suggestions,
            next_meal_focus: report.next_meal_focus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SwapSuggestion {
    pub food_id: String,
    pub name: String,
    pub improvement: String,
    pub nutrition_gain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionGoals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub fiber_g: u32,
    pub reasoning: String,
}

impl NutritionGoals {
    pub const DEFAULT_FIBER_G: u32 = 25;

    /// Fixed 25/45/30 protein/carbs/fat split of the calorie target.
    pub fn from_calories(calories: u32, reasoning: impl Into<String>) -> Self {
        let kcal = f64::from(calories);
        Self {
            calories,
            protein_g: (kcal * 0.25 / 4.0) as u32,
            carbs_g: (kcal * 0.45 / 4.0) as u32,
            fat_g: (kcal * 0.30 / 9.0) as u32,
            fiber_g: Self::DEFAULT_FIBER_G,
            reasoning: reasoning.into(),
        }
    }
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self::from_calories(2000, "Reference 2000 kcal diet")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlannedMeal {
    pub food_id: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub day: u32,
    pub breakfast: Option<PlannedMeal>,
    pub lunch: Option<PlannedMeal>,
    pub dinner: Option<PlannedMeal>,
}

impl DayPlan {
    pub fn meals(&self) -> impl Iterator<Item = &PlannedMeal> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
    pub shopping_list: Vec<String>,
    pub total_weekly_cost: String,
}

/// Aggregate nutrition over the logs of one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeriodTotals {
    pub total_calories: f64,
    pub avg_daily_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub days_logged: u32,
    pub meals_logged: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendReport {
    pub trends: Vec<String>,
    pub concerns: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SmartRecommendations {
    pub recommendations: Vec<Recommendation>,
    /// `None` when there were no recent logs to analyze.
    pub trend_insights: Option<TrendReport>,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostTip {
    pub category: String,
    pub tip: String,
    pub savings: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostTips {
    pub tips: Vec<CostTip>,
    pub total_potential_savings: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AiServiceStatus {
    Active,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AiStatus {
    pub status: AiServiceStatus,
    #[serde(flatten)]
    pub usage: UsageStats,
    pub features_enabled: Vec<String>,
}
