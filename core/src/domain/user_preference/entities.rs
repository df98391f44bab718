use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::PriceTier;

/// The single stored preference record of a deployment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct UserPreference {
    #[serde(default)]
    pub diet_style: DietStyle,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default, alias = "budget")]
    pub price_ceiling: PriceTier,
    #[serde(default)]
    pub home_area: Option<String>,
    /// Most recent first.
    #[serde(default)]
    pub recent_picks: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DietStyle {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
    Halal,
    Keto,
}

impl DietStyle {
    pub fn as_str(&self) -> &str {
        match self {
            DietStyle::Omnivore => "omnivore",
            DietStyle::Vegetarian => "vegetarian",
            DietStyle::Vegan => "vegan",
            DietStyle::Halal => "halal",
            DietStyle::Keto => "keto",
        }
    }
}

impl From<&str> for DietStyle {
    fn from(s: &str) -> Self {
        match s {
            "vegetarian" => DietStyle::Vegetarian,
            "vegan" => DietStyle::Vegan,
            "halal" => DietStyle::Halal,
            "keto" => DietStyle::Keto,
            _ => DietStyle::Omnivore,
        }
    }
}
