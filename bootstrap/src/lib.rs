//! spacecraft-bootstrap - 统一服务启动骨架
//!
//! 所有服务复用的启动逻辑

pub mod health;
pub mod metrics;
mod reflection;
mod runtime;
mod starter;

pub use self::health::{HealthChecker, HealthServer, ReadinessProbe};
pub use self::metrics::{MetricsRecorder, RequestTimer};
pub use reflection::*;
pub use runtime::*;
pub use starter::*;
