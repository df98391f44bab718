use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{
    food::ports::FoodService,
    nutrition::{entities::BalanceReport, ports::NutritionService},
};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::AnalyzeMealValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeMealResponse {
    pub data: BalanceReport,
}

#[utoipa::path(
    post,
    path = "/analyze-meal",
    tag = "food",
    summary = "Analyze meal balance",
    description = "Scores a meal against the daily goals and suggests what to eat next.",
    request_body = AnalyzeMealValidator,
    responses(
        (status = 200, body = AnalyzeMealResponse),
        (status = 404, description = "Unknown food id")
    ),
)]
pub async fn analyze_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeMealValidator>,
) -> Result<Response<AnalyzeMealResponse>, ApiError> {
    let meal_foods = state
        .service
        .get_foods_by_ids(payload.food_ids)
        .await
        .map_err(ApiError::from)?;

    let report = state
        .service
        .analyze_meal_balance(meal_foods, payload.daily_goals.into(), payload.meal_type)
        .await;

    Ok(Response::OK(AnalyzeMealResponse { data: report }))
}
