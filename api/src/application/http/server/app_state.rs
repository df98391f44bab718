use std::sync::Arc;

use spark_core::{
    application::SparkService,
    domain::user_preference::{entities::UserPreference, ports::UserPreferenceService},
};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SparkService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SparkService) -> Self {
        Self { args, service }
    }

    /// Preferences sent with the request win over the stored ones.
    pub async fn preference_or_stored(
        &self,
        supplied: Option<UserPreference>,
    ) -> Result<UserPreference, ApiError> {
        match supplied {
            Some(preference) => Ok(preference),
            None => self
                .service
                .get_preferences()
                .await
                .map_err(ApiError::from),
        }
    }
}
