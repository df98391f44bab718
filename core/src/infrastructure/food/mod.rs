pub mod mappers;
pub mod repositories;
pub mod seed_data;
