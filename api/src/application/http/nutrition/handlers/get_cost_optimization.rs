use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::nutrition::{entities::CostTips, ports::NutritionService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CostOptimizationResponse {
    pub data: CostTips,
}

#[utoipa::path(
    get,
    path = "/cost-optimization",
    tag = "nutrition",
    summary = "Cost optimization tips",
    responses(
        (status = 200, body = CostOptimizationResponse)
    ),
)]
pub async fn get_cost_optimization(
    State(state): State<AppState>,
) -> Result<Response<CostOptimizationResponse>, ApiError> {
    let tips = state.service.cost_optimization_tips().await;

    Ok(Response::OK(CostOptimizationResponse { data: tips }))
}
