//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use spacecraft_config::AppConfig;
use spacecraft_errors::AppResult;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// 交给服务构建闭包的上下文
pub struct ServiceContext {
    config: AppConfig,
    health: Arc<HealthChecker>,
}

impl ServiceContext {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 用于注册就绪探针
    pub fn health(&self) -> Arc<HealthChecker> {
        self.health.clone()
    }
}

/// 运行 gRPC 服务
///
/// 这是所有微服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 安装 Prometheus 记录器
/// 4. 启动健康检查 HTTP 服务器
/// 5. 调用用户提供的闭包构建 gRPC 服务
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use spacecraft_bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |ctx, mut server| async move {
///         let service = MyServiceImpl::new();
///         Ok(server.add_service(MyServiceServer::new(service)))
///     }).await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    server_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(ServiceContext, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::install()?);

    // 4. 启动健康检查 HTTP 服务器
    let health_checker = Arc::new(HealthChecker::new());
    let health_server = HealthServer::new(health_checker.clone(), metrics, config.health_port());

    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    // 5. 构建服务地址
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // 6. 让服务构建 gRPC 路由
    let ctx = ServiceContext {
        config: config.clone(),
        health: health_checker,
    };
    let router = server_builder(ctx, Server::builder()).await?;

    info!(%addr, "gRPC server starting");

    // 7. 启动服务器
    router.serve_with_shutdown(addr, shutdown_signal()).await?;

    // 8. 清理
    health_handle.abort();

    info!("Service stopped");

    Ok(())
}
