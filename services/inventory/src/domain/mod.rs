//! 领域层
//!
//! 零件实体、类别枚举、过滤条件和仓储接口

pub mod category;
pub mod filter;
pub mod part;
pub mod repositories;

pub use category::*;
pub use filter::*;
pub use part::*;
pub use repositories::*;
