pub mod mappers;
pub mod repositories;
