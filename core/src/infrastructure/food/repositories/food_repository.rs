use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::OnConflict,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{entities::Food, ports::FoodRepository, value_objects::GetFoodsFilter},
    },
    entity::foods::{ActiveModel, Column, Entity},
    infrastructure::food::mappers::strings_to_json,
};

#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresFoodRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

fn to_active_model(food: Food) -> ActiveModel {
    ActiveModel {
        id: Set(food.id),
        name: Set(food.name),
        category: Set(food.category.as_str().to_string()),
        tags: Set(strings_to_json(&food.tags)),
        protein_g: Set(food.macros.protein_g),
        carbs_g: Set(food.macros.carbs_g),
        fat_g: Set(food.macros.fat_g),
        kcal: Set(i32::try_from(food.kcal).unwrap_or(i32::MAX)),
        areas: Set(strings_to_json(&food.availability.areas)),
        chains: Set(strings_to_json(&food.availability.chains)),
        price_tier: Set(food.price_tier.as_str().to_string()),
        created_at: Set(Utc::now().fixed_offset()),
    }
}

impl FoodRepository for PostgresFoodRepository {
    async fn list_foods(&self, filter: GetFoodsFilter) -> Result<Vec<Food>, CoreError> {
        let mut query = Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        let foods = query
            .order_by_asc(Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list foods: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Food::from)
            .collect();

        Ok(foods)
    }

    async fn get_by_id(&self, food_id: String) -> Result<Option<Food>, CoreError> {
        let food = Entity::find_by_id(food_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get food by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(food.map(Food::from))
    }

    async fn get_by_ids(&self, food_ids: Vec<String>) -> Result<Vec<Food>, CoreError> {
        if food_ids.is_empty() {
            return Ok(vec![]);
        }

        let foods = Entity::find()
            .filter(Column::Id.is_in(food_ids))
            .order_by_asc(Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get foods by ids: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Food::from)
            .collect();

        Ok(foods)
    }

    async fn insert_missing(&self, foods: Vec<Food>) -> Result<u64, CoreError> {
        if foods.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(foods.into_iter().map(to_active_model))
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to seed foods: {}", e);
                CoreError::InternalServerError
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::foods::Model;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn model(id: &str, category: &str) -> Model {
        Model {
            id: id.to_string(),
            name: format!("Food {id}"),
            category: category.to_string(),
            tags: json!(["protein"]),
            protein_g: 30.0,
            carbs_g: 40.0,
            fat_g: 10.0,
            kcal: 400,
            areas: json!([]),
            chains: json!([]),
            price_tier: "medium".to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn list_foods_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("food_001", "bowl"), model("food_002", "drink")]])
            .into_connection();
        let repository = PostgresFoodRepository::new(db);

        let foods = repository.list_foods(GetFoodsFilter::default()).await.unwrap();

        assert_eq!(foods.len(), 2);
        assert_eq!(foods[1].id, "food_002");
    }

    #[tokio::test]
    async fn missing_food_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();
        let repository = PostgresFoodRepository::new(db);

        assert_eq!(repository.get_by_id("nope".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_id_list_skips_the_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repository = PostgresFoodRepository::new(db);

        assert!(repository.get_by_ids(vec![]).await.unwrap().is_empty());
    }
}
