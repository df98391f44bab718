use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLogValidator {
    #[validate(length(min = 1, message = "food_id is required"))]
    pub food_id: String,

    /// One serving when omitted.
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 20.0, message = "servings must be in (0, 20]"))]
    pub servings: Option<f64>,

    #[serde(default)]
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
pub struct GetLogsQuery {
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_servings_are_rejected() {
        let request: CreateLogValidator =
            serde_json::from_str(r#"{"food_id": "food_001", "servings": 0}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn servings_may_be_omitted() {
        let request: CreateLogValidator =
            serde_json::from_str(r#"{"food_id": "food_001"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.servings, None);
    }
}
