use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_trends::{__path_analyze_trends, analyze_trends},
    calculate_balance_score::{__path_calculate_balance_score, calculate_balance_score},
    calculate_daily_goals::{__path_calculate_daily_goals, calculate_daily_goals},
    generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan},
    get_ai_status::{__path_get_ai_status, get_ai_status},
    get_cost_optimization::{__path_get_cost_optimization, get_cost_optimization},
    get_smart_recommendations::{__path_get_smart_recommendations, get_smart_recommendations},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    calculate_daily_goals,
    generate_meal_plan,
    analyze_trends,
    calculate_balance_score,
    get_smart_recommendations,
    get_cost_optimization,
    get_ai_status
))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/nutrition/daily-goals", root_path),
            post(calculate_daily_goals),
        )
        .route(
            &format!("{}/nutrition/meal-plan", root_path),
            post(generate_meal_plan),
        )
        .route(
            &format!("{}/nutrition/trends", root_path),
            post(analyze_trends),
        )
        .route(
            &format!("{}/nutrition/balance-score", root_path),
            post(calculate_balance_score),
        )
        .route(
            &format!("{}/nutrition/smart-recommendations", root_path),
            post(get_smart_recommendations),
        )
        .route(
            &format!("{}/nutrition/cost-optimization", root_path),
            get(get_cost_optimization),
        )
        .route(
            &format!("{}/nutrition/ai-status", root_path),
            get(get_ai_status),
        )
}
