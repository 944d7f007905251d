//! inventory - 零件目录服务
//!
//! 内存中的只读零件目录：按 ID 查询，以及多条件过滤列表。

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use api::proto::v1 as proto;
