use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, user_preference::entities::UserPreference,
};

#[cfg_attr(test, mockall::automock)]
pub trait UserPreferenceRepository: Send + Sync {
    fn get_preference(
        &self,
    ) -> impl Future<Output = Result<Option<UserPreference>, CoreError>> + Send;

    fn upsert_preference(
        &self,
        preference: UserPreference,
    ) -> impl Future<Output = Result<UserPreference, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserPreferenceService: Send + Sync {
    /// Returns the stored preference, or the defaults when none was saved yet.
    fn get_preferences(&self) -> impl Future<Output = Result<UserPreference, CoreError>> + Send;

    fn update_preferences(
        &self,
        preference: UserPreference,
    ) -> impl Future<Output = Result<UserPreference, CoreError>> + Send;
}
