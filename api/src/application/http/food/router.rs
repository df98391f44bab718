use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_meal::{__path_analyze_meal, analyze_meal},
    get_ai_usage_stats::{__path_get_ai_usage_stats, get_ai_usage_stats},
    get_food::{__path_get_food, get_food},
    get_foods::{__path_get_foods, get_foods},
    recommend_foods::{__path_recommend_foods, recommend_foods},
    suggest_swaps::{__path_suggest_swaps, suggest_swaps},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_foods,
    get_food,
    recommend_foods,
    analyze_meal,
    suggest_swaps,
    get_ai_usage_stats
))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/foods", root_path), get(get_foods))
        .route(
            &format!("{}/foods/ai-usage-stats", root_path),
            get(get_ai_usage_stats),
        )
        .route(&format!("{}/foods/{{food_id}}", root_path), get(get_food))
        .route(
            &format!("{}/foods/recommend", root_path),
            post(recommend_foods),
        )
        .route(
            &format!("{}/foods/analyze-meal", root_path),
            post(analyze_meal),
        )
        .route(
            &format!("{}/foods/suggest-swaps", root_path),
            post(suggest_swaps),
        )
}
