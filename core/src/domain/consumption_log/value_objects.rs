use chrono::{DateTime, Utc};

pub const DEFAULT_LOG_LIMIT: u32 = 50;
pub const DEFAULT_SERVINGS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct CreateConsumptionLogInput {
    pub food_id: String,
    pub servings: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetConsumptionLogsFilter {
    pub limit: Option<u32>,
    pub consumed_after: Option<DateTime<Utc>>,
}
