use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::user_preference::{
    entities::UserPreference, ports::UserPreferenceService,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPreferencesResponse {
    pub data: UserPreference,
}

#[utoipa::path(
    get,
    path = "/preferences",
    tag = "user",
    summary = "Get preferences",
    description = "The stored preferences, or the defaults when none were saved.",
    responses(
        (status = 200, body = GetPreferencesResponse)
    ),
)]
pub async fn get_preferences(
    State(state): State<AppState>,
) -> Result<Response<GetPreferencesResponse>, ApiError> {
    let preference = state
        .service
        .get_preferences()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPreferencesResponse { data: preference }))
}
