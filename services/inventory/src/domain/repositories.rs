//! 零件仓储接口

use std::sync::Arc;

use async_trait::async_trait;
use spacecraft_errors::AppResult;

use super::{Part, PartFilter, PartId};

/// 零件仓储接口
///
/// 读操作可以任意并发；`initialize` 独占整个目录，读者只会看到替换前或替换后的完整内容。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartRepository: Send + Sync {
    /// 根据 ID 获取零件，不存在时返回 `AppError::NotFound`
    async fn get_by_id(&self, id: &PartId) -> AppResult<Arc<Part>>;

    /// 返回满足过滤条件的全部零件，顺序不保证
    async fn list_by_filter(&self, filter: &PartFilter) -> Vec<Arc<Part>>;

    /// 用给定记录替换目录内容，返回加载的记录数
    async fn initialize(&self, parts: Vec<Part>) -> AppResult<usize>;

    /// 当前记录数
    async fn len(&self) -> usize;

    /// 是否已经完成过一次加载
    async fn is_initialized(&self) -> bool;
}
