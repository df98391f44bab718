use crate::{
    domain::consumption_log::entities::ConsumptionLog,
    entity::consumption_logs::Model as ConsumptionLogModel,
};

impl From<ConsumptionLogModel> for ConsumptionLog {
    fn from(model: ConsumptionLogModel) -> Self {
        ConsumptionLog {
            id: model.id,
            food_id: model.food_id,
            consumed_at: model.consumed_at.to_utc(),
            servings: model.servings,
            notes: model.notes,
        }
    }
}
