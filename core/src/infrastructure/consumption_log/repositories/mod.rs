pub mod consumption_log_repository;
