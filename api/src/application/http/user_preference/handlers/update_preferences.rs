use axum::extract::State;
use serde::{Deserialize, Serialize};
use spark_core::domain::user_preference::{
    entities::UserPreference, ports::UserPreferenceService,
};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user_preference::validators::UpdatePreferencesValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePreferencesResponse {
    pub data: UserPreference,
}

#[utoipa::path(
    put,
    path = "/preferences",
    tag = "user",
    summary = "Update preferences",
    description = "Replaces the stored preferences.",
    request_body = UpdatePreferencesValidator,
    responses(
        (status = 200, body = UpdatePreferencesResponse)
    ),
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdatePreferencesValidator>,
) -> Result<Response<UpdatePreferencesResponse>, ApiError> {
    let preference = state
        .service
        .update_preferences(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePreferencesResponse { data: preference }))
}
