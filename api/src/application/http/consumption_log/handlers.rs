pub mod create_log;
pub mod get_logs;
