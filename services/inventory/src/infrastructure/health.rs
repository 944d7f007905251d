//! 目录就绪探针

use std::sync::Arc;

use async_trait::async_trait;
use spacecraft_bootstrap::ReadinessProbe;
use spacecraft_telemetry::ComponentHealth;

use crate::domain::PartRepository;

/// 目录加载完成前报告未就绪
pub struct CatalogReadiness {
    repo: Arc<dyn PartRepository>,
}

impl CatalogReadiness {
    pub fn new(repo: Arc<dyn PartRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ReadinessProbe for CatalogReadiness {
    async fn check(&self) -> ComponentHealth {
        if self.repo.is_initialized().await {
            ComponentHealth::healthy("catalog")
        } else {
            ComponentHealth::unhealthy("catalog", "Catalog not loaded")
        }
    }
}
