//! Part queries

use crate::domain::{PartFilter, PartId};

/// 获取零件查询
#[derive(Debug, Clone)]
pub struct GetPartQuery {
    pub id: PartId,
}

/// 列表零件查询
#[derive(Debug, Clone, Default)]
pub struct ListPartsQuery {
    pub filter: PartFilter,
}
