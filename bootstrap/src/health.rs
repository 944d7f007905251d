//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use spacecraft_telemetry::{ComponentHealth, HealthStatus};
use tokio::sync::RwLock;
use tracing::info;

use crate::metrics::MetricsRecorder;

/// 就绪探针
///
/// 由各服务实现并注册到 [`HealthChecker`]，例如"目录是否已加载"。
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn check(&self) -> ComponentHealth;
}

/// 健康检查器
pub struct HealthChecker {
    probes: RwLock<Vec<Arc<dyn ReadinessProbe>>>,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self {
            probes: RwLock::new(Vec::new()),
        }
    }

    /// 注册就绪探针
    pub async fn register(&self, probe: Arc<dyn ReadinessProbe>) {
        self.probes.write().await.push(probe);
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 执行就绪检查（readiness）
    ///
    /// 没有注册任何探针时视为尚未就绪
    pub async fn readiness(&self) -> HealthStatus {
        let probes = self.probes.read().await;
        let mut status = HealthStatus::healthy();

        if probes.is_empty() {
            status.add_check(ComponentHealth::unhealthy("service", "Not initialized"));
            return status;
        }

        for probe in probes.iter() {
            status.add_check(probe.check().await);
        }

        status
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HTTP 健康检查服务器
// ============================================================================

/// HTTP 健康检查服务器状态
#[derive(Clone)]
struct HealthServerState {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
}

/// HTTP 健康检查服务器
pub struct HealthServer {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
    port: u16,
}

impl HealthServer {
    /// 创建新的健康检查服务器
    pub fn new(checker: Arc<HealthChecker>, metrics: Arc<MetricsRecorder>, port: u16) -> Self {
        Self {
            checker,
            metrics,
            port,
        }
    }

    /// 启动 HTTP 服务器
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let state = HealthServerState {
            checker: self.checker,
            metrics: self.metrics,
        };

        let app = Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(%addr, "Health check HTTP server starting");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await
    }
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let metrics = state.metrics.render();
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        metrics,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(bool);

    #[async_trait]
    impl ReadinessProbe for FixedProbe {
        async fn check(&self) -> ComponentHealth {
            if self.0 {
                ComponentHealth::healthy("fixed")
            } else {
                ComponentHealth::unhealthy("fixed", "down")
            }
        }
    }

    #[tokio::test]
    async fn test_readiness_without_probes_is_unhealthy() {
        let checker = HealthChecker::new();
        assert!(!checker.readiness().await.is_healthy());
        assert!(checker.liveness().await.is_healthy());
    }

    #[tokio::test]
    async fn test_readiness_aggregates_probes() {
        let checker = HealthChecker::new();
        checker.register(Arc::new(FixedProbe(true))).await;
        assert!(checker.readiness().await.is_healthy());

        checker.register(Arc::new(FixedProbe(false))).await;
        let status = checker.readiness().await;
        assert!(!status.is_healthy());
        assert_eq!(status.checks.len(), 2);
    }
}
