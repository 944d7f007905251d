//! API layer - gRPC service implementations

mod grpc_service;
pub mod proto;
pub mod proto_converters;

pub use grpc_service::{InventoryServiceImpl, SERVICE_NAME};
pub use proto::FILE_DESCRIPTOR_SET;
