use std::collections::HashMap;

use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{
    food::{entities::Food, ports::FoodService, value_objects::GetFoodsFilter},
    nutrition::ports::NutritionService,
};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::RecommendFoodsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendedFood {
    pub food: Food,
    pub reason: String,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendFoodsResponse {
    pub data: Vec<RecommendedFood>,
}

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "food",
    summary = "Recommend foods",
    description = "Ranks catalog foods for the given preferences and health context.",
    request_body = RecommendFoodsValidator,
    responses(
        (status = 200, body = RecommendFoodsResponse)
    ),
)]
pub async fn recommend_foods(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendFoodsValidator>,
) -> Result<Response<RecommendFoodsResponse>, ApiError> {
    let preference = state.preference_or_stored(payload.user_pref).await?;
    let catalog = state
        .service
        .get_foods(GetFoodsFilter::default())
        .await
        .map_err(ApiError::from)?;

    let recommendations = state
        .service
        .recommend(
            preference,
            payload.health_context.into(),
            catalog.clone(),
            payload.limit,
        )
        .await;

    let by_id: HashMap<&str, &Food> = catalog.iter().map(|f| (f.id.as_str(), f)).collect();
    let data = recommendations
        .into_iter()
        .filter_map(|recommendation| {
            by_id
                .get(recommendation.food_id.as_str())
                .map(|food| RecommendedFood {
                    food: (*food).clone(),
                    reason: recommendation.reason,
                    score: recommendation.score,
                })
        })
        .collect();

    Ok(Response::OK(RecommendFoodsResponse { data }))
}
