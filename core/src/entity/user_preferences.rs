use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub diet_style: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub dislikes: Json,
    pub price_ceiling: String,
    pub home_area: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub recent_picks: Json,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
