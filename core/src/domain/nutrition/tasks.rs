//! The AI-backed features, each expressed as an [`AdvisoryTask`].

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::Food,
    nutrition::{
        entities::{
            BalanceReport, CostTips, DayPlan, MealPlan, MealTotals, NutritionGoals, PeriodTotals,
            PlannedMeal, Recommendation, SwapSuggestion, TrendReport,
        },
        fallback::{self, MAX_SWAPS},
        json_extract::{decode, parse_array, parse_object},
        orchestrator::AdvisoryTask,
        prompts,
        value_objects::{HealthContext, TrendPeriod, UserProfile},
    },
    user_preference::entities::UserPreference,
};

fn score_in_unit_range(score: f64, field: &str) -> Result<f64, CoreError> {
    if score.is_finite() && (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(CoreError::ParseError(format!("{field} {score} is outside [0, 1]")))
    }
}

#[derive(Deserialize)]
struct RecommendationReply {
    food_id: String,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    score: Option<f64>,
}

/// Elements that are not recommendation-shaped are dropped rather than
/// failing the whole reply.
fn parse_recommendations(raw: &str) -> Result<Vec<Recommendation>, CoreError> {
    Ok(parse_array(raw)?
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RecommendationReply>(item).ok())
        .map(|reply| Recommendation {
            food_id: reply.food_id,
            reason: reply
                .reason
                .filter(|reason| !reason.trim().is_empty())
                .unwrap_or_else(|| "Recommended for you".to_string()),
            score: reply
                .score
                .filter(|score| score.is_finite())
                .map_or(fallback::FALLBACK_SCORE, |score| score.clamp(0.0, 1.0)),
        })
        .collect())
}

/// Keeps catalog ids only, once each, capped at `limit`.
fn ground_recommendations(
    recommendations: Vec<Recommendation>,
    catalog: &[Food],
    limit: usize,
) -> Result<Vec<Recommendation>, CoreError> {
    let known: HashSet<&str> = catalog.iter().map(|food| food.id.as_str()).collect();
    let mut seen = HashSet::new();

    let grounded: Vec<Recommendation> = recommendations
        .into_iter()
        .filter(|rec| known.contains(rec.food_id.as_str()))
        .filter(|rec| seen.insert(rec.food_id.clone()))
        .take(limit)
        .collect();

    if grounded.is_empty() && limit > 0 {
        return Err(CoreError::ParseError(
            "no recommended food exists in the catalog".to_string(),
        ));
    }

    Ok(grounded)
}

pub struct RecommendTask<'a> {
    pub preference: &'a UserPreference,
    pub health: &'a HealthContext,
    pub catalog: &'a [Food],
    pub limit: usize,
}

impl AdvisoryTask for RecommendTask<'_> {
    type Output = Vec<Recommendation>;

    const NAME: &'static str = "food_recommendations";
    const MAX_OUTPUT_TOKENS: u32 = 800;

    fn prompt(&self) -> String {
        prompts::recommendation_prompt(self.preference, self.health, self.catalog, self.limit)
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        parse_recommendations(raw)
    }

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        ground_recommendations(output, self.catalog, self.limit)
    }

    fn fallback(&self) -> Self::Output {
        fallback::recommendations(self.health, self.catalog, self.limit)
    }
}

pub struct SmartRecommendTask<'a> {
    pub preference: &'a UserPreference,
    pub health: &'a HealthContext,
    pub insights: Option<&'a TrendReport>,
    pub catalog: &'a [Food],
    pub limit: usize,
}

impl AdvisoryTask for SmartRecommendTask<'_> {
    type Output = Vec<Recommendation>;

    const NAME: &'static str = "smart_recommendations";
    const MAX_OUTPUT_TOKENS: u32 = 800;

    fn prompt(&self) -> String {
        prompts::smart_recommendation_prompt(
            self.preference,
            self.health,
            self.insights,
            self.catalog,
            self.limit,
        )
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        parse_recommendations(raw)
    }

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        ground_recommendations(output, self.catalog, self.limit)
    }

    fn fallback(&self) -> Self::Output {
        fallback::recommendations(self.health, self.catalog, self.limit)
    }
}

#[derive(Deserialize)]
struct BalanceReply {
    balance_score: f64,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default, alias = "improvements")]
    suggestions: Vec<String>,
    #[serde(default)]
    next_meal_focus: Option<String>,
}

pub struct MealBalanceTask<'a> {
    pub totals: MealTotals,
    pub goals: &'a NutritionGoals,
    pub meal_type: &'a str,
}

impl AdvisoryTask for MealBalanceTask<'_> {
    type Output = BalanceReport;

    const NAME: &'static str = "meal_balance";
    const MAX_OUTPUT_TOKENS: u32 = 500;

    fn prompt(&self) -> String {
        prompts::meal_balance_prompt(&self.totals, self.goals, self.meal_type)
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        let reply: BalanceReply = decode(Value::Object(parse_object(raw)?))?;

        Ok(BalanceReport {
            balance_score: reply.balance_score,
            strengths: reply.strengths,
            weaknesses: reply.weaknesses,
            suggestions: reply.suggestions,
            next_meal_focus: reply
                .next_meal_focus
                .unwrap_or_else(|| "balance".to_string()),
        })
    }

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        score_in_unit_range(output.balance_score, "balance_score")?;
        Ok(output)
    }

    fn fallback(&self) -> Self::Output {
        fallback::meal_balance(&self.totals, self.goals)
    }
}

#[derive(Deserialize)]
struct SwapReply {
    food_id: String,
    #[serde(default)]
    improvement: String,
    #[serde(default)]
    nutrition_gain: String,
}

pub struct SwapTask<'a> {
    pub current: &'a Food,
    pub preference: &'a UserPreference,
    pub catalog: &'a [Food],
}

impl AdvisoryTask for SwapTask<'_> {
    type Output = Vec<SwapSuggestion>;

    const NAME: &'static str = "food_swaps";
    const MAX_OUTPUT_TOKENS: u32 = 600;

    fn prompt(&self) -> String {
        prompts::swap_prompt(self.current, self.preference, self.catalog)
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        let mut seen = HashSet::new();

        let swaps: Vec<SwapSuggestion> = parse_array(raw)?
            .into_iter()
            .filter_map(|item| serde_json::from_value::<SwapReply>(item).ok())
            .filter(|reply| reply.food_id != self.current.id)
            .filter_map(|reply| {
                let food = self.catalog.iter().find(|food| food.id == reply.food_id)?;
                Some(SwapSuggestion {
                    food_id: food.id.clone(),
                    name: food.name.clone(),
                    improvement: reply.improvement,
                    nutrition_gain: reply.nutrition_gain,
                })
            })
            .filter(|swap| seen.insert(swap.food_id.clone()))
            .take(MAX_SWAPS)
            .collect();

        if swaps.is_empty() {
            return Err(CoreError::ParseError(
                "no suggested swap exists in the catalog".to_string(),
            ));
        }

        Ok(swaps)
    }

    fn fallback(&self) -> Self::Output {
        fallback::swaps(self.current, self.preference, self.catalog)
    }
}

#[derive(Deserialize)]
struct GoalsReply {
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    #[serde(default)]
    fiber_g: Option<f64>,
    #[serde(default)]
    reasoning: String,
}

pub struct DailyGoalsTask<'a> {
    pub profile: &'a UserProfile,
    pub health: &'a HealthContext,
}

impl AdvisoryTask for DailyGoalsTask<'_> {
    type Output = NutritionGoals;

    const NAME: &'static str = "daily_goals";
    const MAX_OUTPUT_TOKENS: u32 = 400;

    fn prompt(&self) -> String {
        prompts::daily_goals_prompt(self.profile, self.health)
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        let reply: GoalsReply = decode(Value::Object(parse_object(raw)?))?;
        let fiber_g = reply
            .fiber_g
            .unwrap_or(f64::from(NutritionGoals::DEFAULT_FIBER_G));

        let grams = [reply.calories, reply.protein_g, reply.carbs_g, reply.fat_g, fiber_g];
        if grams.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(CoreError::ParseError(
                "goals must be finite and non-negative".to_string(),
            ));
        }

        Ok(NutritionGoals {
            calories: reply.calories.round() as u32,
            protein_g: reply.protein_g.round() as u32,
            carbs_g: reply.carbs_g.round() as u32,
            fat_g: reply.fat_g.round() as u32,
            fiber_g: fiber_g.round() as u32,
            reasoning: reply.reasoning,
        })
    }

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        if output.calories == 0 {
            return Err(CoreError::ParseError("calories must be positive".to_string()));
        }
        Ok(output)
    }

    fn fallback(&self) -> Self::Output {
        fallback::nutrition_goals(self.profile, self.health)
    }
}

#[derive(Deserialize)]
struct DayReply {
    #[serde(default)]
    breakfast: Option<PlannedMeal>,
    #[serde(default)]
    lunch: Option<PlannedMeal>,
    #[serde(default)]
    dinner: Option<PlannedMeal>,
}

pub struct MealPlanTask<'a> {
    pub preference: &'a UserPreference,
    pub health: &'a HealthContext,
    pub catalog: &'a [Food],
    pub days: u32,
}

impl AdvisoryTask for MealPlanTask<'_> {
    type Output = MealPlan;

    const NAME: &'static str = "meal_plan";
    const MAX_OUTPUT_TOKENS: u32 = 1000;

    fn prompt(&self) -> String {
        prompts::meal_plan_prompt(self.preference, self.health, self.catalog, self.days)
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        let mut object = parse_object(raw)?;

        let mut days = Vec::new();
        for day in 1..=self.days {
            let key = format!("day_{day}");
            let value = object
                .remove(&key)
                .ok_or_else(|| CoreError::ParseError(format!("missing {key}")))?;
            let reply: DayReply = decode(value)?;
            days.push(DayPlan {
                day,
                breakfast: reply.breakfast,
                lunch: reply.lunch,
                dinner: reply.dinner,
            });
        }

        let shopping_list = match object.remove("shopping_list") {
            Some(value) => decode(value)?,
            None => Vec::new(),
        };
        let total_weekly_cost = match object.remove("total_weekly_cost") {
            Some(Value::String(cost)) => cost,
            Some(Value::Number(cost)) => format!("${cost}"),
            _ => String::new(),
        };

        Ok(MealPlan {
            days,
            shopping_list,
            total_weekly_cost,
        })
    }

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        let known: HashSet<&str> = self.catalog.iter().map(|food| food.id.as_str()).collect();

        if let Some(meal) = output
            .days
            .iter()
            .flat_map(DayPlan::meals)
            .find(|meal| !known.contains(meal.food_id.as_str()))
        {
            return Err(CoreError::ParseError(format!(
                "planned food {} is not in the catalog",
                meal.food_id
            )));
        }

        Ok(output)
    }

    fn fallback(&self) -> Self::Output {
        fallback::meal_plan(self.catalog, self.days)
    }
}

#[derive(Deserialize)]
struct TrendReply {
    #[serde(default)]
    trends: Vec<String>,
    #[serde(default)]
    concerns: Vec<String>,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
    score: f64,
}

pub struct TrendTask {
    pub totals: PeriodTotals,
    pub period: TrendPeriod,
}

impl AdvisoryTask for TrendTask {
    type Output = TrendReport;

    const NAME: &'static str = "trend_analysis";
    const MAX_OUTPUT_TOKENS: u32 = 600;

    fn prompt(&self) -> String {
        prompts::trend_prompt(&self.totals, self.period)
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        let reply: TrendReply = decode(Value::Object(parse_object(raw)?))?;

        Ok(TrendReport {
            trends: reply.trends,
            concerns: reply.concerns,
            strengths: reply.strengths,
            recommendations: reply.recommendations,
            score: reply.score,
        })
    }

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        score_in_unit_range(output.score, "score")?;
        Ok(output)
    }

    fn fallback(&self) -> Self::Output {
        fallback::trend_report(&self.totals)
    }
}

pub struct CostTipsTask;

impl AdvisoryTask for CostTipsTask {
    type Output = CostTips;

    const NAME: &'static str = "cost_optimization";
    const MAX_OUTPUT_TOKENS: u32 = 600;

    fn prompt(&self) -> String {
        prompts::cost_tips_prompt()
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError> {
        decode(Value::Object(parse_object(raw)?))
    }

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        if output.tips.is_empty() {
            return Err(CoreError::ParseError("no tips in reply".to_string()));
        }
        Ok(output)
    }

    fn fallback(&self) -> Self::Output {
        fallback::cost_tips()
    }
}
