use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    #[sea_orm(column_type = "Double")]
    pub protein_g: f64,
    #[sea_orm(column_type = "Double")]
    pub carbs_g: f64,
    #[sea_orm(column_type = "Double")]
    pub fat_g: f64,
    pub kcal: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub areas: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub chains: Json,
    pub price_tier: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::consumption_logs::Entity")]
    ConsumptionLogs,
}

impl Related<super::consumption_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsumptionLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
