use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::{
    food::{ports::FoodService, value_objects::GetFoodsFilter},
    nutrition::{entities::MealPlan, ports::NutritionService},
};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::MealPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateMealPlanResponse {
    pub data: MealPlan,
}

#[utoipa::path(
    post,
    path = "/meal-plan",
    tag = "nutrition",
    summary = "Generate meal plan",
    description = "Plans breakfast, lunch and dinner for up to seven days from the stored catalog.",
    request_body = MealPlanValidator,
    responses(
        (status = 200, body = GenerateMealPlanResponse)
    ),
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealPlanValidator>,
) -> Result<Response<GenerateMealPlanResponse>, ApiError> {
    let preference = state.preference_or_stored(payload.user_pref).await?;
    let catalog = state
        .service
        .get_foods(GetFoodsFilter::default())
        .await
        .map_err(ApiError::from)?;

    let plan = state
        .service
        .generate_meal_plan(
            preference,
            payload.health_context.into(),
            catalog,
            payload.days,
        )
        .await;

    Ok(Response::OK(GenerateMealPlanResponse { data: plan }))
}
