pub mod budget;
pub mod entities;
pub mod ports;
pub mod services;
pub mod usage;

pub use entities::*;
pub use ports::*;
