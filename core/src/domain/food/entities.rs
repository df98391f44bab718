use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub tags: Vec<String>,
    pub macros: Macros,
    pub kcal: u32,
    pub availability: Availability,
    pub price_tier: PriceTier,
}

impl Food {
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        self.tags
            .iter()
            .any(|tag| tags.iter().any(|other| other.eq_ignore_ascii_case(tag)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Availability {
    pub areas: Vec<String>,
    pub chains: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Bowl,
    Wrap,
    Salad,
    Snack,
    Drink,
}

impl FoodCategory {
    pub fn as_str(&self) -> &str {
        match self {
            FoodCategory::Bowl => "bowl",
            FoodCategory::Wrap => "wrap",
            FoodCategory::Salad => "salad",
            FoodCategory::Snack => "snack",
            FoodCategory::Drink => "drink",
        }
    }
}

impl From<&str> for FoodCategory {
    fn from(s: &str) -> Self {
        match s {
            "bowl" => FoodCategory::Bowl,
            "wrap" => FoodCategory::Wrap,
            "salad" => FoodCategory::Salad,
            "drink" => FoodCategory::Drink,
            _ => FoodCategory::Snack,
        }
    }
}

/// Price label shown to the model; tiers carry no ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    #[serde(alias = "$")]
    Low,
    #[default]
    #[serde(alias = "$$")]
    Medium,
    #[serde(alias = "$$$")]
    High,
}

impl PriceTier {
    pub fn as_str(&self) -> &str {
        match self {
            PriceTier::Low => "low",
            PriceTier::Medium => "medium",
            PriceTier::High => "high",
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            PriceTier::Low => "$",
            PriceTier::Medium => "$$",
            PriceTier::High => "$$$",
        }
    }
}

impl From<&str> for PriceTier {
    fn from(s: &str) -> Self {
        match s {
            "low" | "$" => PriceTier::Low,
            "high" | "$$$" => PriceTier::High,
            _ => PriceTier::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_tier_accepts_symbol_aliases() {
        let tier: PriceTier = serde_json::from_str("\"$$$\"").unwrap();
        assert_eq!(tier, PriceTier::High);
        let tier: PriceTier = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(tier, PriceTier::Low);
    }

    #[test]
    fn price_tier_round_trips_through_storage_labels() {
        for tier in [PriceTier::Low, PriceTier::Medium, PriceTier::High] {
            assert_eq!(PriceTier::from(tier.as_str()), tier);
            assert_eq!(PriceTier::from(tier.symbol()), tier);
        }
        assert_eq!(PriceTier::from("luxury"), PriceTier::Medium);
    }

    #[test]
    fn unknown_category_from_storage_maps_to_snack() {
        assert_eq!(FoodCategory::from("bowl"), FoodCategory::Bowl);
        assert_eq!(FoodCategory::from("soup"), FoodCategory::Snack);
    }
}
