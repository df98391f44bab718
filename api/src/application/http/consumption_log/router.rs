use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_log::{__path_create_log, create_log},
    get_logs::{__path_get_logs, get_logs},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_log, get_logs))]
pub struct ConsumptionLogApiDoc;

pub fn consumption_log_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/logs", state.args.server.root_path),
            post(create_log),
        )
        .route(
            &format!("{}/logs", state.args.server.root_path),
            get(get_logs),
        )
}
