use serde::{Deserialize, Serialize};
use spark_core::domain::{
    food::entities::PriceTier,
    user_preference::entities::{DietStyle, UserPreference},
};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePreferencesValidator {
    #[serde(default)]
    pub diet_style: DietStyle,

    #[serde(default)]
    #[validate(length(max = 50, message = "at most 50 dislikes"))]
    pub dislikes: Vec<String>,

    #[serde(default, alias = "budget")]
    pub price_ceiling: PriceTier,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "home_area must be 1 to 100 characters"))]
    pub home_area: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 recent picks"))]
    pub recent_picks: Vec<String>,
}

impl From<UpdatePreferencesValidator> for UserPreference {
    fn from(value: UpdatePreferencesValidator) -> Self {
        Self {
            diet_style: value.diet_style,
            dislikes: value.dislikes,
            price_ceiling: value.price_ceiling,
            home_area: value.home_area,
            recent_picks: value.recent_picks,
        }
    }
}
