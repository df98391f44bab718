use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use spark_core::domain::food::{entities::Food, ports::FoodService, value_objects::GetFoodsFilter};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::GetFoodsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodsResponse {
    pub data: Vec<Food>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "Get foods",
    description = "Lists the catalog, optionally restricted to one category.",
    params(GetFoodsQuery),
    responses(
        (status = 200, body = GetFoodsResponse)
    ),
)]
pub async fn get_foods(
    Query(query): Query<GetFoodsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodsResponse>, ApiError> {
    let foods = state
        .service
        .get_foods(GetFoodsFilter {
            category: query.category,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodsResponse { data: foods }))
}
