use crate::domain::food::entities::FoodCategory;

#[derive(Debug, Clone, Default)]
pub struct GetFoodsFilter {
    pub category: Option<FoodCategory>,
}
