//! `SeaORM` Entity definitions for the spark schema.

pub mod prelude;

pub mod consumption_logs;
pub mod foods;
pub mod user_preferences;
