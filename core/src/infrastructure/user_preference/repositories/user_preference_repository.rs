use std::sync::Arc;

use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user_preference::{entities::UserPreference, ports::UserPreferenceRepository},
    },
    entity::user_preferences::{ActiveModel, Column, Entity},
    infrastructure::food::mappers::strings_to_json,
};

/// The deployment keeps a single preference row.
pub const PREFERENCE_ROW_ID: i32 = 1;

#[derive(Debug, Clone)]
pub struct PostgresUserPreferenceRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresUserPreferenceRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

impl UserPreferenceRepository for PostgresUserPreferenceRepository {
    async fn get_preference(&self) -> Result<Option<UserPreference>, CoreError> {
        let preference = Entity::find_by_id(PREFERENCE_ROW_ID)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get user preference: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(preference.map(UserPreference::from))
    }

    async fn upsert_preference(
        &self,
        preference: UserPreference,
    ) -> Result<UserPreference, CoreError> {
        let active_model = ActiveModel {
            id: Set(PREFERENCE_ROW_ID),
            diet_style: Set(preference.diet_style.as_str().to_string()),
            dislikes: Set(strings_to_json(&preference.dislikes)),
            price_ceiling: Set(preference.price_ceiling.as_str().to_string()),
            home_area: Set(preference.home_area.clone()),
            recent_picks: Set(strings_to_json(&preference.recent_picks)),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let stored = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::DietStyle,
                        Column::Dislikes,
                        Column::PriceCeiling,
                        Column::HomeArea,
                        Column::RecentPicks,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to upsert user preference: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserPreference::from(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{food::entities::PriceTier, user_preference::entities::DietStyle},
        entity::user_preferences::Model,
    };
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    #[tokio::test]
    async fn stored_row_maps_to_preference() {
        let row = Model {
            id: PREFERENCE_ROW_ID,
            diet_style: "vegan".to_string(),
            dislikes: json!(["spicy"]),
            price_ceiling: "low".to_string(),
            home_area: Some("campus".to_string()),
            recent_picks: json!(["food_004"]),
            updated_at: Utc::now().fixed_offset(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let preference = PostgresUserPreferenceRepository::new(db)
            .get_preference()
            .await
            .unwrap()
            .unwrap();

        assert_eq!(preference.diet_style, DietStyle::Vegan);
        assert_eq!(preference.price_ceiling, PriceTier::Low);
        assert_eq!(preference.dislikes, vec!["spicy".to_string()]);
        assert_eq!(preference.home_area.as_deref(), Some("campus"));
    }
}
