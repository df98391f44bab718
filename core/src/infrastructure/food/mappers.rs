use sea_orm::JsonValue;

use crate::{
    domain::food::entities::{Availability, Food, FoodCategory, Macros, PriceTier},
    entity::foods::Model as FoodModel,
};

/// Reads a jsonb string array, treating anything else as empty.
pub fn json_to_strings(value: &JsonValue) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

pub fn strings_to_json(values: &[String]) -> JsonValue {
    JsonValue::from(values.to_vec())
}

impl From<&FoodModel> for Food {
    fn from(model: &FoodModel) -> Self {
        Food {
            id: model.id.clone(),
            name: model.name.clone(),
            category: FoodCategory::from(model.category.as_str()),
            tags: json_to_strings(&model.tags),
            macros: Macros {
                protein_g: model.protein_g,
                carbs_g: model.carbs_g,
                fat_g: model.fat_g,
            },
            kcal: u32::try_from(model.kcal).unwrap_or(0),
            availability: Availability {
                areas: json_to_strings(&model.areas),
                chains: json_to_strings(&model.chains),
            },
            price_tier: PriceTier::from(model.price_tier.as_str()),
        }
    }
}

impl From<FoodModel> for Food {
    fn from(model: FoodModel) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn model_maps_to_food() {
        let model = FoodModel {
            id: "food_001".to_string(),
            name: "Chicken Teriyaki Bowl".to_string(),
            category: "bowl".to_string(),
            tags: json!(["protein", "asian"]),
            protein_g: 35.0,
            carbs_g: 45.0,
            fat_g: 12.0,
            kcal: 420,
            areas: json!(["downtown"]),
            chains: json!("not an array"),
            price_tier: "$$".to_string(),
            created_at: Utc::now().fixed_offset(),
        };

        let food = Food::from(model);

        assert_eq!(food.category, FoodCategory::Bowl);
        assert_eq!(food.tags, vec!["protein".to_string(), "asian".to_string()]);
        assert_eq!(food.availability.areas, vec!["downtown".to_string()]);
        assert!(food.availability.chains.is_empty());
        assert_eq!(food.price_tier, PriceTier::Medium);
        assert_eq!(food.kcal, 420);
    }
}
