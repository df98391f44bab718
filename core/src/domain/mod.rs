pub mod common;
pub mod consumption_log;
pub mod food;
pub mod health;
pub mod llm;
pub mod nutrition;
pub mod user_preference;
