pub mod analyze_trends;
pub mod calculate_balance_score;
pub mod calculate_daily_goals;
pub mod generate_meal_plan;
pub mod get_ai_status;
pub mod get_cost_optimization;
pub mod get_smart_recommendations;
