use serde::{Deserialize, Serialize};
use spark_core::domain::{
    nutrition::{
        entities::NutritionGoals,
        value_objects::{ActivityLevel, HealthContext, MoodEnergy, TrendPeriod, UserProfile},
    },
    user_preference::entities::UserPreference,
};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct HealthContextValidator {
    #[serde(default = "default_sleep_hours")]
    #[validate(range(min = 0.0, max = 12.0, message = "sleep_hours must be between 0 and 12"))]
    pub sleep_hours: f64,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default, alias = "mood")]
    pub mood_energy: MoodEnergy,
}

fn default_sleep_hours() -> f64 {
    8.0
}

impl Default for HealthContextValidator {
    fn default() -> Self {
        Self {
            sleep_hours: default_sleep_hours(),
            activity_level: ActivityLevel::default(),
            mood_energy: MoodEnergy::default(),
        }
    }
}

impl From<HealthContextValidator> for HealthContext {
    fn from(value: HealthContextValidator) -> Self {
        Self {
            sleep_hours: value.sleep_hours,
            activity_level: value.activity_level,
            mood_energy: value.mood_energy,
        }
    }
}

/// Daily targets supplied by the client. Macros left out follow the
/// 25/45/30 split of `calories`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DailyGoalsValidator {
    #[validate(range(min = 500, max = 10000, message = "calories must be between 500 and 10000"))]
    pub calories: u32,

    #[serde(default)]
    pub protein_g: Option<u32>,

    #[serde(default)]
    pub carbs_g: Option<u32>,

    #[serde(default)]
    pub fat_g: Option<u32>,

    #[serde(default)]
    pub fiber_g: Option<u32>,
}

impl Default for DailyGoalsValidator {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            fiber_g: None,
        }
    }
}

impl From<DailyGoalsValidator> for NutritionGoals {
    fn from(value: DailyGoalsValidator) -> Self {
        let split = NutritionGoals::from_calories(value.calories, "Client supplied goals");
        Self {
            protein_g: value.protein_g.unwrap_or(split.protein_g),
            carbs_g: value.carbs_g.unwrap_or(split.carbs_g),
            fat_g: value.fat_g.unwrap_or(split.fat_g),
            fiber_g: value.fiber_g.unwrap_or(split.fiber_g),
            ..split
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserProfileValidator {
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,

    #[serde(alias = "weight")]
    #[validate(range(min = 20.0, max = 400.0, message = "weight_kg must be between 20 and 400"))]
    pub weight_kg: f64,

    #[serde(alias = "height")]
    #[validate(range(min = 50.0, max = 250.0, message = "height_cm must be between 50 and 250"))]
    pub height_cm: f64,

    #[serde(default = "default_goals")]
    #[validate(length(max = 200))]
    pub goals: String,
}

fn default_goals() -> String {
    "maintain".to_string()
}

impl From<UserProfileValidator> for UserProfile {
    fn from(value: UserProfileValidator) -> Self {
        Self {
            age: value.age,
            weight_kg: value.weight_kg,
            height_cm: value.height_cm,
            goals: value.goals,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DailyGoalsRequestValidator {
    #[validate(nested)]
    pub user_profile: UserProfileValidator,

    #[serde(default)]
    #[validate(nested)]
    pub health_context: HealthContextValidator,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct MealPlanValidator {
    /// Stored preferences are used when omitted.
    #[serde(default)]
    pub user_pref: Option<UserPreference>,

    #[serde(default)]
    #[validate(nested)]
    pub health_context: HealthContextValidator,

    #[serde(default = "default_plan_days")]
    #[validate(range(min = 1, max = 7, message = "days must be between 1 and 7"))]
    pub days: u32,
}

fn default_plan_days() -> u32 {
    3
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrendsValidator {
    #[serde(default, alias = "time_period")]
    pub period: TrendPeriod,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BalanceScoreValidator {
    #[validate(length(min = 1, max = 50, message = "between 1 and 50 foods are required"))]
    pub consumed_food_ids: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub daily_goals: DailyGoalsValidator,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SmartRecommendationsValidator {
    #[serde(default)]
    pub user_pref: Option<UserPreference>,

    #[serde(default)]
    #[validate(nested)]
    pub health_context: HealthContextValidator,

    #[serde(default = "default_recommendation_limit")]
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: usize,
}

pub fn default_recommendation_limit() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_hours_outside_range_is_rejected() {
        let context = HealthContextValidator {
            sleep_hours: 14.0,
            ..Default::default()
        };
        assert!(context.validate().is_err());
        assert!(HealthContextValidator::default().validate().is_ok());
    }

    #[test]
    fn omitted_macros_follow_calorie_split() {
        let goals = NutritionGoals::from(DailyGoalsValidator {
            calories: 2000,
            protein_g: Some(150),
            ..Default::default()
        });

        assert_eq!(goals.protein_g, 150);
        assert_eq!(goals.carbs_g, 225);
        assert_eq!(goals.fat_g, 66);
        assert_eq!(goals.fiber_g, 25);
    }

    #[test]
    fn nested_profile_errors_surface_on_request() {
        let request: DailyGoalsRequestValidator = serde_json::from_str(
            r#"{"user_profile": {"age": 0, "weight": 70, "height": 170}}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn meal_plan_defaults_to_three_days() {
        let request: MealPlanValidator = serde_json::from_str("{}").unwrap();
        assert_eq!(request.days, 3);
        assert!(request.validate().is_ok());
        assert!(request.user_pref.is_none());
    }
}
