//! Domain models for the encite system.

mod chunk;
mod entity;
mod response;

pub use chunk::*;
pub use entity::*;
pub use response::*;
