use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    get_preferences::{__path_get_preferences, get_preferences},
    update_preferences::{__path_update_preferences, update_preferences},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_preferences, update_preferences))]
pub struct UserPreferenceApiDoc;

pub fn user_preference_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/preferences", state.args.server.root_path),
            get(get_preferences),
        )
        .route(
            &format!("{}/users/preferences", state.args.server.root_path),
            put(update_preferences),
        )
}
