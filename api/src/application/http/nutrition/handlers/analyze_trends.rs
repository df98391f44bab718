use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::nutrition::{entities::TrendReport, ports::NutritionService};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::TrendsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeTrendsResponse {
    pub data: TrendReport,
}

#[utoipa::path(
    post,
    path = "/trends",
    tag = "nutrition",
    summary = "Analyze trends",
    description = "Analyzes the consumption logs stored for the last day, week or month.",
    request_body = TrendsValidator,
    responses(
        (status = 200, body = AnalyzeTrendsResponse)
    ),
)]
pub async fn analyze_trends(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<TrendsValidator>,
) -> Result<Response<AnalyzeTrendsResponse>, ApiError> {
    let report = state
        .service
        .analyze_recent_trends(payload.period)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeTrendsResponse { data: report }))
}
