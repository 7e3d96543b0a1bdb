pub mod dto;
pub mod entity;
pub mod ports;

pub use dto::*;
pub use entity::*;
pub use ports::*;
