use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::nutrition::{entities::NutritionGoals, ports::NutritionService};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::DailyGoalsRequestValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CalculateDailyGoalsResponse {
    pub data: NutritionGoals,
}

#[utoipa::path(
    post,
    path = "/daily-goals",
    tag = "nutrition",
    summary = "Calculate daily goals",
    description = "Daily calorie and macro targets for a profile. Falls back to Mifflin-St Jeor when the model is unavailable.",
    request_body = DailyGoalsRequestValidator,
    responses(
        (status = 200, body = CalculateDailyGoalsResponse)
    ),
)]
pub async fn calculate_daily_goals(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DailyGoalsRequestValidator>,
) -> Result<Response<CalculateDailyGoalsResponse>, ApiError> {
    let goals = state
        .service
        .calculate_daily_goals(payload.user_profile.into(), payload.health_context.into())
        .await;

    Ok(Response::OK(CalculateDailyGoalsResponse { data: goals }))
}
