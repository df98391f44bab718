use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::Food;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    #[serde(rename = "none", alias = "sedentary")]
    Sedentary,
    Light,
    #[default]
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityLevel::Sedentary => "none",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Intense => "intense",
        }
    }

    /// Multiplier applied to the basal metabolic rate.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoodEnergy {
    Low,
    #[default]
    Normal,
    High,
}

impl MoodEnergy {
    pub fn as_str(&self) -> &str {
        match self {
            MoodEnergy::Low => "low",
            MoodEnergy::Normal => "normal",
            MoodEnergy::High => "high",
        }
    }
}

/// Per-request wellbeing signals. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthContext {
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default, alias = "mood")]
    pub mood_energy: MoodEnergy,
}

fn default_sleep_hours() -> f64 {
    8.0
}

impl Default for HealthContext {
    fn default() -> Self {
        Self {
            sleep_hours: default_sleep_hours(),
            activity_level: ActivityLevel::default(),
            mood_energy: MoodEnergy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserProfile {
    pub age: u32,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(alias = "height")]
    pub height_cm: f64,
    pub goals: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 30,
            weight_kg: 70.0,
            height_cm: 170.0,
            goals: "maintain".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Day,
    #[default]
    Week,
    Month,
}

impl TrendPeriod {
    pub fn as_str(&self) -> &str {
        match self {
            TrendPeriod::Day => "day",
            TrendPeriod::Week => "week",
            TrendPeriod::Month => "month",
        }
    }

    /// Look-back window used when loading stored logs.
    pub fn window(&self) -> Duration {
        match self {
            TrendPeriod::Day => Duration::days(1),
            TrendPeriod::Week => Duration::days(7),
            TrendPeriod::Month => Duration::days(30),
        }
    }
}

/// A consumption log joined with the food it references.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendEntry {
    pub food: Food,
    pub date: NaiveDate,
    pub servings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_context_fills_missing_fields() {
        let ctx: HealthContext = serde_json::from_str(r#"{"activity_level": "none"}"#).unwrap();

        assert_eq!(ctx.activity_level, ActivityLevel::Sedentary);
        assert_eq!(ctx.mood_energy, MoodEnergy::Normal);
        assert_eq!(ctx.sleep_hours, 8.0);
    }

    #[test]
    fn user_profile_accepts_short_field_names() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"weight": 80, "height": 180}"#).unwrap();

        assert_eq!(profile.weight_kg, 80.0);
        assert_eq!(profile.height_cm, 180.0);
        assert_eq!(profile.age, 30);
        assert_eq!(profile.goals, "maintain");
    }

    #[test]
    fn activity_factors() {
        assert_eq!(ActivityLevel::Sedentary.factor(), 1.2);
        assert_eq!(ActivityLevel::Light.factor(), 1.375);
        assert_eq!(ActivityLevel::Moderate.factor(), 1.55);
        assert_eq!(ActivityLevel::Intense.factor(), 1.725);
    }
}
