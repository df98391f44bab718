use axum::extract::{Path, State};
use spark_core::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::Food, ports::FoodService},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "food",
    summary = "Get food",
    params(
        ("food_id" = String, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = Food),
        (status = 404, description = "Food not found")
    ),
)]
pub async fn get_food(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Food>, ApiError> {
    let food = state
        .service
        .get_food(food_id.clone())
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound(format!("Food '{}' not found", food_id)),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(food))
}
