//! Prompt builders. Each prompt ends with an example of the JSON reply it
//! expects, which is the contract the matching parser relies on.

use crate::domain::{
    food::entities::Food,
    nutrition::{
        entities::{MealTotals, NutritionGoals, PeriodTotals, TrendReport},
        value_objects::{HealthContext, TrendPeriod, UserProfile},
    },
    user_preference::entities::UserPreference,
};

pub const RECOMMEND_CATALOG_CAP: usize = 20;
pub const MEAL_PLAN_CATALOG_CAP: usize = 15;
pub const SMART_RECOMMEND_CATALOG_CAP: usize = 15;
pub const SWAP_CATALOG_CAP: usize = 15;

fn preference_line(pref: &UserPreference) -> String {
    let dislikes = if pref.dislikes.is_empty() {
        "none".to_string()
    } else {
        pref.dislikes.join(", ")
    };

    format!(
        "User: {} diet, budget {}, dislikes: {}",
        pref.diet_style.as_str(),
        pref.price_ceiling.symbol(),
        dislikes
    )
}

fn health_line(health: &HealthContext) -> String {
    format!(
        "Health: {}h sleep, {} activity, {} mood",
        health.sleep_hours,
        health.activity_level.as_str(),
        health.mood_energy.as_str()
    )
}

fn catalog_lines(catalog: &[Food], cap: usize) -> String {
    catalog
        .iter()
        .take(cap)
        .map(|food| {
            format!(
                "{}: {} ({}kcal, {}g protein)",
                food.id, food.name, food.kcal, food.macros.protein_g
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub fn recommendation_prompt(
    pref: &UserPreference,
    health: &HealthContext,
    catalog: &[Food],
    limit: usize,
) -> String {
    format!(
        "Recommend {limit} foods based on:\n\n{}\n{}\n\nAvailable foods:\n{}\n\n\
         Return JSON: [{{\"food_id\": \"food_001\", \"reason\": \"High protein for recovery\", \"score\": 0.9}}]",
        preference_line(pref),
        health_line(health),
        catalog_lines(catalog, RECOMMEND_CATALOG_CAP),
    )
}

pub fn meal_balance_prompt(totals: &MealTotals, goals: &NutritionGoals, meal_type: &str) -> String {
    format!(
        "Analyze this {meal_type} meal balance:\n\n\
         Meal totals: {} kcal, {}g protein, {}g carbs, {}g fat\n\
         Daily goals: {} kcal, {}g protein, {}g carbs, {}g fat, {}g fiber\n\n\
         Consider:\n- Macronutrient ratios\n- Meal timing appropriateness\n- Satiety factors\n- Nutrient density\n\n\
         Return JSON: {{\"balance_score\": 0.8, \"strengths\": [\"good protein\", \"adequate calories\"], \
         \"weaknesses\": [\"low fiber\"], \"suggestions\": [\"add vegetables\"], \
         \"next_meal_focus\": \"fiber and micronutrients\"}}",
        totals.calories,
        totals.protein_g,
        totals.carbs_g,
        totals.fat_g,
        goals.calories,
        goals.protein_g,
        goals.carbs_g,
        goals.fat_g,
        goals.fiber_g,
    )
}

pub fn swap_prompt(current: &Food, pref: &UserPreference, catalog: &[Food]) -> String {
    let alternatives = catalog
        .iter()
        .filter(|food| food.id != current.id)
        .take(SWAP_CATALOG_CAP)
        .map(|food| format!("{}: {} ({}kcal)", food.id, food.name, food.kcal))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Suggest 3 healthier alternatives to: {}\n\n\
         Current nutrition: {}g protein, {}g carbs, {}g fat - {} kcal\n\n{}\n\n\
         Available alternatives:\n{}\n\n\
         Return JSON: [{{\"food_id\": \"food_002\", \"name\": \"Mediterranean Wrap\", \
         \"improvement\": \"Lower calories, higher fiber\", \"nutrition_gain\": \"More fiber, less fat\"}}]",
        current.name,
        current.macros.protein_g,
        current.macros.carbs_g,
        current.macros.fat_g,
        current.kcal,
        preference_line(pref),
        alternatives,
    )
}

pub fn daily_goals_prompt(profile: &UserProfile, health: &HealthContext) -> String {
    format!(
        "Calculate daily nutrition goals for:\n\
         - Age: {}\n- Weight: {}kg\n- Height: {}cm\n- Activity: {}\n- Sleep: {} hours\n- Goals: {}\n\n\
         Return JSON: {{\"calories\": 2000, \"protein_g\": 150, \"carbs_g\": 250, \"fat_g\": 67, \
         \"fiber_g\": 25, \"reasoning\": \"Based on moderate activity and maintenance goals\"}}",
        profile.age,
        profile.weight_kg,
        profile.height_cm,
        health.activity_level.as_str(),
        health.sleep_hours,
        profile.goals,
    )
}

pub fn meal_plan_prompt(
    pref: &UserPreference,
    health: &HealthContext,
    catalog: &[Food],
    days: u32,
) -> String {
    format!(
        "Create a {days}-day meal plan using only the food ids listed below.\n\n{}\n{}\n\n\
         Available foods:\n{}\n\n\
         Return JSON with one \"day_N\" key per day: {{\
         \"day_1\": {{\"breakfast\": {{\"food_id\": \"food_001\", \"reason\": \"High protein start\"}}, \
         \"lunch\": {{\"food_id\": \"food_002\", \"reason\": \"Balanced nutrition\"}}, \
         \"dinner\": {{\"food_id\": \"food_003\", \"reason\": \"Light and healthy\"}}}}, \
         \"shopping_list\": [\"ingredient1\", \"ingredient2\"], \"total_weekly_cost\": \"$45\"}}",
        preference_line(pref),
        health_line(health),
        catalog_lines(catalog, MEAL_PLAN_CATALOG_CAP),
    )
}

pub fn trend_prompt(totals: &PeriodTotals, period: TrendPeriod) -> String {
    format!(
        "Analyze nutrition trends over the past {}:\n\n\
         Totals: {} kcal total, {:.0} kcal daily average, {}g protein, {}g carbs, {}g fat, \
         {} meals over {} days\n\n\
         Look for:\n- Consistent patterns\n- Nutrient deficiencies\n- Overconsumption areas\n\
         - Meal timing patterns\n- Variety in food choices\n\n\
         Return JSON: {{\"trends\": [\"increasing protein\"], \"concerns\": [\"low fiber intake\"], \
         \"strengths\": [\"good protein\"], \"recommendations\": [\"add more vegetables\"], \"score\": 0.7}}",
        period.as_str(),
        totals.total_calories,
        totals.avg_daily_calories,
        totals.total_protein,
        totals.total_carbs,
        totals.total_fat,
        totals.meals_logged,
        totals.days_logged,
    )
}

pub fn smart_recommendation_prompt(
    pref: &UserPreference,
    health: &HealthContext,
    insights: Option<&TrendReport>,
    catalog: &[Food],
    limit: usize,
) -> String {
    let (trends, concerns, strengths) = match insights {
        Some(report) => (
            list_or_none(&report.trends),
            list_or_none(&report.concerns),
            list_or_none(&report.strengths),
        ),
        None => ("none".to_string(), "none".to_string(), "none".to_string()),
    };

    format!(
        "Recommend {limit} foods considering:\n\n{}\n{}\n\
         Recent trends: {trends}\nConcerns: {concerns}\nStrengths: {strengths}\n\n\
         Available foods:\n{}\n\n\
         Return JSON: [{{\"food_id\": \"food_001\", \"reason\": \"Addresses low fiber concern\", \"score\": 0.9}}]",
        preference_line(pref),
        health_line(health),
        catalog_lines(catalog, SMART_RECOMMEND_CATALOG_CAP),
    )
}

pub fn cost_tips_prompt() -> String {
    "Provide 5 practical tips for optimizing food costs while maintaining nutrition:\n\n\
     Focus on:\n- Budget-friendly protein sources\n- Seasonal produce\n- Meal prep strategies\n\
     - Smart shopping\n- Waste reduction\n\n\
     Return JSON: {\"tips\": [{\"category\": \"protein\", \"tip\": \"Use eggs and beans as affordable protein sources\", \
     \"savings\": \"$20/week\"}, {\"category\": \"produce\", \"tip\": \"Buy seasonal vegetables\", \
     \"savings\": \"$15/week\"}], \"total_potential_savings\": \"$50/week\"}"
        .to_string()
}
