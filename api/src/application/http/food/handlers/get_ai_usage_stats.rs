use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{llm::entities::UsageStats, nutrition::ports::NutritionService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AiUsageStatsResponse {
    pub data: UsageStats,
}

#[utoipa::path(
    get,
    path = "/ai-usage-stats",
    tag = "food",
    summary = "AI usage statistics",
    description = "Tokens, estimated cost and request count since the process started.",
    responses(
        (status = 200, body = AiUsageStatsResponse)
    ),
)]
pub async fn get_ai_usage_stats(
    State(state): State<AppState>,
) -> Result<Response<AiUsageStatsResponse>, ApiError> {
    Ok(Response::OK(AiUsageStatsResponse {
        data: state.service.usage_stats(),
    }))
}
