use serde::{Deserialize, Serialize};
use spark_core::domain::{
    food::entities::FoodCategory, user_preference::entities::UserPreference,
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::nutrition::validators::{
    DailyGoalsValidator, HealthContextValidator, default_recommendation_limit,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetFoodsQuery {
    pub category: Option<FoodCategory>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendFoodsValidator {
    /// Stored preferences are used when omitted.
    #[serde(default)]
    pub user_pref: Option<UserPreference>,

    #[serde(default)]
    #[validate(nested)]
    pub health_context: HealthContextValidator,

    #[serde(default = "default_recommendation_limit")]
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeMealValidator {
    #[validate(length(min = 1, max = 20, message = "between 1 and 20 foods are required"))]
    pub food_ids: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub daily_goals: DailyGoalsValidator,

    #[serde(default = "default_meal_type")]
    #[validate(length(min = 1, max = 32, message = "meal_type must be 1 to 32 characters"))]
    pub meal_type: String,
}

fn default_meal_type() -> String {
    "lunch".to_string()
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestSwapsValidator {
    #[validate(length(min = 1, message = "current_food_id is required"))]
    pub current_food_id: String,

    #[serde(default)]
    pub user_pref: Option<UserPreference>,

    /// Candidates to choose from. The whole catalog when omitted.
    #[serde(default)]
    #[validate(length(max = 50))]
    pub candidate_food_ids: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_limit_is_bounded() {
        let request: RecommendFoodsValidator = serde_json::from_str(r#"{"limit": 50}"#).unwrap();
        assert!(request.validate().is_err());

        let request: RecommendFoodsValidator = serde_json::from_str("{}").unwrap();
        assert_eq!(request.limit, 5);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_meal_is_rejected() {
        let request: AnalyzeMealValidator =
            serde_json::from_str(r#"{"food_ids": []}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn meal_type_defaults_to_lunch() {
        let request: AnalyzeMealValidator =
            serde_json::from_str(r#"{"food_ids": ["food_001"]}"#).unwrap();
        assert_eq!(request.meal_type, "lunch");
        assert_eq!(request.daily_goals.calories, 2000);
    }
}
