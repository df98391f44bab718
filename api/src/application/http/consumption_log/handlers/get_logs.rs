use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use spark_core::domain::consumption_log::{
    entities::ConsumptionLog, ports::ConsumptionLogService,
    value_objects::GetConsumptionLogsFilter,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    consumption_log::validators::GetLogsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetLogsResponse {
    pub data: Vec<ConsumptionLog>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "log",
    summary = "Get logs",
    description = "Most recent consumption logs first, 50 by default.",
    params(GetLogsQuery),
    responses(
        (status = 200, body = GetLogsResponse)
    ),
)]
pub async fn get_logs(
    Query(query): Query<GetLogsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetLogsResponse>, ApiError> {
    query
        .validate()
        .map_err(|errors| ApiError::UnProcessableEntity(errors.to_string()))?;

    let logs = state
        .service
        .get_logs(GetConsumptionLogsFilter {
            limit: query.limit,
            consumed_after: None,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLogsResponse { data: logs }))
}
