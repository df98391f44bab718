use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{
    common::entities::app_errors::CoreError,
    consumption_log::{
        entities::ConsumptionLog, ports::ConsumptionLogService,
        value_objects::CreateConsumptionLogInput,
    },
};
use utoipa::ToSchema;

use crate::application::http::{
    consumption_log::validators::CreateLogValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateLogResponse {
    pub data: ConsumptionLog,
}

#[utoipa::path(
    post,
    path = "",
    tag = "log",
    summary = "Log consumption",
    description = "Records that a catalog food was eaten now.",
    request_body = CreateLogValidator,
    responses(
        (status = 201, body = CreateLogResponse),
        (status = 404, description = "Food not found")
    ),
)]
pub async fn create_log(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateLogValidator>,
) -> Result<Response<CreateLogResponse>, ApiError> {
    let food_id = payload.food_id.clone();
    let log = state
        .service
        .log_consumption(CreateConsumptionLogInput {
            food_id: payload.food_id,
            servings: payload.servings,
            notes: payload.notes,
        })
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound(format!("Food '{}' not found", food_id)),
            e => ApiError::from(e),
        })?;

    Ok(Response::Created(CreateLogResponse { data: log }))
}
