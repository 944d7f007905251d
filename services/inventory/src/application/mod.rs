//! Application layer

pub mod handler;
pub mod queries;

pub use handler::PartQueryHandler;
pub use queries::*;
