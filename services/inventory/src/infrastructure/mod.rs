//! 基础设施层

pub mod health;
pub mod persistence;
pub mod seed;

pub use health::CatalogReadiness;
pub use persistence::InMemoryPartRepository;
pub use seed::{SeedLoader, SeedPart};
