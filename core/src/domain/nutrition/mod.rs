pub mod entities;
pub mod fallback;
pub mod json_extract;
pub mod orchestrator;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod tasks;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
