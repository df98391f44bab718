pub use super::consumption_logs::Entity as ConsumptionLogs;
pub use super::foods::Entity as Foods;
pub use super::user_preferences::Entity as UserPreferences;
