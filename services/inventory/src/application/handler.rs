//! 零件查询处理器

use std::sync::Arc;

use metrics::{counter, gauge, histogram};
use spacecraft_errors::AppResult;
use tracing::{debug, info, warn};

use crate::application::queries::{GetPartQuery, ListPartsQuery};
use crate::domain::{Part, PartRepository};

pub struct PartQueryHandler {
    repo: Arc<dyn PartRepository>,
}

impl PartQueryHandler {
    pub fn new(repo: Arc<dyn PartRepository>) -> Self {
        Self { repo }
    }

    /// 加载初始目录（启动阶段调用一次）
    pub async fn load_catalog(&self, parts: Vec<Part>) -> AppResult<usize> {
        let count = self.repo.initialize(parts).await?;
        gauge!("inventory_catalog_parts").set(count as f64);
        info!(count, "Catalog loaded");
        Ok(count)
    }

    pub async fn get_part(&self, query: GetPartQuery) -> AppResult<Arc<Part>> {
        match self.repo.get_by_id(&query.id).await {
            Ok(part) => {
                counter!("inventory_store_queries_total", "operation" => "get", "outcome" => "found")
                    .increment(1);
                debug!(part_id = %query.id, "Part found");
                Ok(part)
            }
            Err(e) => {
                counter!("inventory_store_queries_total", "operation" => "get", "outcome" => e.kind())
                    .increment(1);
                warn!(part_id = %query.id, error = %e, "Part lookup failed");
                Err(e)
            }
        }
    }

    pub async fn list_parts(&self, query: ListPartsQuery) -> Vec<Arc<Part>> {
        let parts = self.repo.list_by_filter(&query.filter).await;
        counter!("inventory_store_queries_total", "operation" => "list", "outcome" => "ok")
            .increment(1);
        histogram!("inventory_parts_returned").record(parts.len() as f64);
        debug!(
            unfiltered = query.filter.is_empty(),
            returned = parts.len(),
            "Parts listed"
        );
        parts
    }
}
