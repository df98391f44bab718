pub mod user_preference_repository;
