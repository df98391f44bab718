use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{
    food::{ports::FoodService, value_objects::GetFoodsFilter},
    nutrition::{entities::SmartRecommendations, ports::NutritionService, value_objects::TrendPeriod},
};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::SmartRecommendationsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SmartRecommendationsResponse {
    pub data: SmartRecommendations,
}

#[utoipa::path(
    post,
    path = "/smart-recommendations",
    tag = "nutrition",
    summary = "Smart recommendations",
    description = "Recommendations informed by the last week of consumption logs.",
    request_body = SmartRecommendationsValidator,
    responses(
        (status = 200, body = SmartRecommendationsResponse)
    ),
)]
pub async fn get_smart_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SmartRecommendationsValidator>,
) -> Result<Response<SmartRecommendationsResponse>, ApiError> {
    let preference = state.preference_or_stored(payload.user_pref).await?;
    let catalog = state
        .service
        .get_foods(GetFoodsFilter::default())
        .await
        .map_err(ApiError::from)?;
    let recent = state
        .service
        .recent_trend_entries(TrendPeriod::Week)
        .await
        .map_err(ApiError::from)?;

    let recommendations = state
        .service
        .smart_recommendations(
            preference,
            payload.health_context.into(),
            recent,
            catalog,
            payload.limit,
        )
        .await;

    Ok(Response::OK(SmartRecommendationsResponse {
        data: recommendations,
    }))
}
