use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{
    food::ports::FoodService,
    nutrition::{entities::BalanceScore, ports::NutritionService},
};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::BalanceScoreValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CalculateBalanceScoreResponse {
    pub data: BalanceScore,
}

#[utoipa::path(
    post,
    path = "/balance-score",
    tag = "nutrition",
    summary = "Calculate balance score",
    description = "Scores everything eaten today against the daily goals.",
    request_body = BalanceScoreValidator,
    responses(
        (status = 200, body = CalculateBalanceScoreResponse),
        (status = 404, description = "Unknown food id")
    ),
)]
pub async fn calculate_balance_score(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BalanceScoreValidator>,
) -> Result<Response<CalculateBalanceScoreResponse>, ApiError> {
    let consumed = state
        .service
        .get_foods_by_ids(payload.consumed_food_ids)
        .await
        .map_err(ApiError::from)?;

    let score = state
        .service
        .balance_score(consumed, payload.daily_goals.into())
        .await;

    Ok(Response::OK(CalculateBalanceScoreResponse { data: score }))
}
