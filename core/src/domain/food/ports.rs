use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::Food, value_objects::GetFoodsFilter},
};

/// Read access to the food catalog, plus the startup seed.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn list_foods(
        &self,
        filter: GetFoodsFilter,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_by_id(
        &self,
        food_id: String,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    fn get_by_ids(
        &self,
        food_ids: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    /// Inserts foods whose id is not yet stored. Returns how many were inserted.
    fn insert_missing(
        &self,
        foods: Vec<Food>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    fn get_foods(
        &self,
        filter: GetFoodsFilter,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food(&self, food_id: String) -> impl Future<Output = Result<Food, CoreError>> + Send;

    /// Resolves ids in the order given, repeats included. Fails with
    /// `NotFound` when any id is unknown.
    fn get_foods_by_ids(
        &self,
        food_ids: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn seed_catalog(
        &self,
        foods: Vec<Food>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
