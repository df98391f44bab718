use crate::domain::food::entities::{Availability, Food, FoodCategory, Macros, PriceTier};

struct SeedFood {
    id: &'static str,
    name: &'static str,
    category: FoodCategory,
    tags: &'static [&'static str],
    macros: (f64, f64, f64),
    kcal: u32,
    areas: &'static [&'static str],
    chains: &'static [&'static str],
    price_tier: PriceTier,
}

const SEED_FOODS: &[SeedFood] = &[
    SeedFood {
        id: "food_001",
        name: "Chicken Teriyaki Bowl",
        category: FoodCategory::Bowl,
        tags: &["protein", "asian", "teriyaki", "chicken"],
        macros: (35.0, 45.0, 12.0),
        kcal: 420,
        areas: &["downtown", "campus"],
        chains: &["Panda Express", "Local Asian"],
        price_tier: PriceTier::Medium,
    },
    SeedFood {
        id: "food_002",
        name: "Mediterranean Wrap",
        category: FoodCategory::Wrap,
        tags: &["healthy", "mediterranean", "vegetarian", "fresh"],
        macros: (18.0, 35.0, 15.0),
        kcal: 320,
        areas: &["downtown", "campus", "suburbs"],
        chains: &["Local Mediterranean", "Chipotle"],
        price_tier: PriceTier::Medium,
    },
    SeedFood {
        id: "food_003",
        name: "Caesar Salad",
        category: FoodCategory::Salad,
        tags: &["salad", "caesar", "lettuce", "croutons"],
        macros: (12.0, 15.0, 25.0),
        kcal: 280,
        areas: &["downtown", "campus"],
        chains: &["Local Cafe", "Panera"],
        price_tier: PriceTier::Medium,
    },
    SeedFood {
        id: "food_004",
        name: "Protein Smoothie",
        category: FoodCategory::Drink,
        tags: &["protein", "smoothie", "healthy", "drink"],
        macros: (25.0, 20.0, 5.0),
        kcal: 200,
        areas: &["campus", "gym"],
        chains: &["Jamba Juice", "Local Smoothie"],
        price_tier: PriceTier::Low,
    },
    SeedFood {
        id: "food_005",
        name: "Veggie Burger",
        category: FoodCategory::Wrap,
        tags: &["vegetarian", "vegan", "burger", "plant-based"],
        macros: (20.0, 30.0, 18.0),
        kcal: 350,
        areas: &["downtown", "campus"],
        chains: &["Local Burger", "Shake Shack"],
        price_tier: PriceTier::Medium,
    },
    SeedFood {
        id: "food_006",
        name: "Greek Yogurt Parfait",
        category: FoodCategory::Snack,
        tags: &["healthy", "breakfast", "vegetarian", "yogurt"],
        macros: (15.0, 30.0, 6.0),
        kcal: 230,
        areas: &["campus", "suburbs"],
        chains: &["Starbucks", "Local Cafe"],
        price_tier: PriceTier::Low,
    },
    SeedFood {
        id: "food_007",
        name: "Salmon Poke Bowl",
        category: FoodCategory::Bowl,
        tags: &["protein", "seafood", "omega-3", "fresh"],
        macros: (32.0, 50.0, 14.0),
        kcal: 480,
        areas: &["downtown"],
        chains: &["Local Poke", "Sweetgreen"],
        price_tier: PriceTier::High,
    },
    SeedFood {
        id: "food_008",
        name: "Quinoa Power Salad",
        category: FoodCategory::Salad,
        tags: &["vegan", "healthy", "quinoa", "plant-based"],
        macros: (14.0, 40.0, 16.0),
        kcal: 360,
        areas: &["downtown", "suburbs"],
        chains: &["Sweetgreen", "Local Cafe"],
        price_tier: PriceTier::High,
    },
    SeedFood {
        id: "food_009",
        name: "Hummus Veggie Snack Box",
        category: FoodCategory::Snack,
        tags: &["vegan", "snack", "hummus", "vegetables"],
        macros: (9.0, 22.0, 12.0),
        kcal: 240,
        areas: &["campus", "gym"],
        chains: &["Starbucks", "Local Mediterranean"],
        price_tier: PriceTier::Low,
    },
    SeedFood {
        id: "food_010",
        name: "Steak Burrito",
        category: FoodCategory::Wrap,
        tags: &["protein", "mexican", "beef", "spicy"],
        macros: (38.0, 60.0, 22.0),
        kcal: 620,
        areas: &["downtown", "campus", "suburbs"],
        chains: &["Chipotle", "Local Mexican"],
        price_tier: PriceTier::Medium,
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Catalog inserted at startup when missing.
pub fn default_catalog() -> Vec<Food> {
    SEED_FOODS
        .iter()
        .map(|seed| Food {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            category: seed.category,
            tags: owned(seed.tags),
            macros: Macros {
                protein_g: seed.macros.0,
                carbs_g: seed.macros.1,
                fat_g: seed.macros.2,
            },
            kcal: seed.kcal,
            availability: Availability {
                areas: owned(seed.areas),
                chains: owned(seed.chains),
            },
            price_tier: seed.price_tier,
        })
        .collect()
}
