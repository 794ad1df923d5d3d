pub mod common;
pub mod school_dto;

pub use common::*;
pub use school_dto::*;
