use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{
    common::entities::app_errors::CoreError,
    food::{ports::FoodService, value_objects::GetFoodsFilter},
    nutrition::{entities::SwapSuggestion, ports::NutritionService},
};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::SuggestSwapsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SuggestSwapsResponse {
    pub data: Vec<SwapSuggestion>,
}

#[utoipa::path(
    post,
    path = "/suggest-swaps",
    tag = "food",
    summary = "Suggest swaps",
    description = "Healthier alternatives to a food, at most three.",
    request_body = SuggestSwapsValidator,
    responses(
        (status = 200, body = SuggestSwapsResponse),
        (status = 404, description = "Unknown food id")
    ),
)]
pub async fn suggest_swaps(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestSwapsValidator>,
) -> Result<Response<SuggestSwapsResponse>, ApiError> {
    let current = state
        .service
        .get_food(payload.current_food_id.clone())
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound(format!(
                "Food '{}' not found",
                payload.current_food_id
            )),
            e => ApiError::from(e),
        })?;
    let preference = state.preference_or_stored(payload.user_pref).await?;

    let candidates = match payload.candidate_food_ids {
        Some(ids) => state.service.get_foods_by_ids(ids).await,
        None => state.service.get_foods(GetFoodsFilter::default()).await,
    }
    .map_err(ApiError::from)?;

    let swaps = state
        .service
        .suggest_swaps(current, preference, candidates)
        .await;

    Ok(Response::OK(SuggestSwapsResponse { data: swaps }))
}
