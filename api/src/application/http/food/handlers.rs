pub mod analyze_meal;
pub mod get_ai_usage_stats;
pub mod get_food;
pub mod get_foods;
pub mod recommend_foods;
pub mod suggest_swaps;
