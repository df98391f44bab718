use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One consumption event. Logs are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConsumptionLog {
    pub id: Uuid,
    pub food_id: String,
    pub consumed_at: DateTime<Utc>,
    pub servings: f64,
    pub notes: Option<String>,
}

impl ConsumptionLog {
    pub fn new(food_id: String, servings: f64, notes: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_id,
            consumed_at: now,
            servings,
            notes,
        }
    }
}
