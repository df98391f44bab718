use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::nutrition::{entities::AiStatus, ports::NutritionService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AiStatusResponse {
    pub data: AiStatus,
}

#[utoipa::path(
    get,
    path = "/ai-status",
    tag = "nutrition",
    summary = "AI status",
    description = "Whether the completion client is configured, with its running usage totals.",
    responses(
        (status = 200, body = AiStatusResponse)
    ),
)]
pub async fn get_ai_status(
    State(state): State<AppState>,
) -> Result<Response<AiStatusResponse>, ApiError> {
    Ok(Response::OK(AiStatusResponse {
        data: state.service.ai_status(),
    }))
}
