//! Data Transfer Objects for REST request/response serialization.

pub mod penguin_dto;
pub mod system_dto;

pub use penguin_dto::*;
pub use system_dto::*;
