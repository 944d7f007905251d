//! inventory Service - Part Catalog

use std::sync::Arc;

use inventory::api::{FILE_DESCRIPTOR_SET, InventoryServiceImpl};
use inventory::application::PartQueryHandler;
use inventory::domain::PartRepository;
use inventory::infrastructure::{CatalogReadiness, InMemoryPartRepository, SeedLoader};
use inventory::proto::inventory_service_server::InventoryServiceServer;
use spacecraft_bootstrap::{ServiceContext, build_reflection, run_server};
use spacecraft_errors::AppError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |ctx: ServiceContext, mut server| async move {
        info!("Initializing inventory service...");

        let repo: Arc<dyn PartRepository> = Arc::new(InMemoryPartRepository::new());
        let handler = Arc::new(PartQueryHandler::new(repo.clone()));

        // 目录必须在接收请求之前加载完成
        let parts = SeedLoader::from_config(&ctx.config().seed)?;
        handler.load_catalog(parts).await?;
        ctx.health()
            .register(Arc::new(CatalogReadiness::new(repo)))
            .await;

        let service = InventoryServiceImpl::new(handler);
        let reflection_service = build_reflection(vec![FILE_DESCRIPTOR_SET])
            .map_err(|e| AppError::internal(format!("Failed to build reflection service: {}", e)))?;

        Ok(server
            .add_service(InventoryServiceServer::new(service))
            .add_service(reflection_service))
    })
    .await
}
