pub mod consumption_log;
pub mod db;
pub mod food;
pub mod health;
pub mod llm;
pub mod user_preference;
