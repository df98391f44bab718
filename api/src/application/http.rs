pub mod consumption_log;
pub mod food;
pub mod health;
pub mod nutrition;
pub mod server;
pub mod user_preference;
