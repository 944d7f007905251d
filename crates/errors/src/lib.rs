//! spacecraft-errors - 统一错误处理
//!
//! 所有服务共用的错误分类，以及到 gRPC 状态码的映射

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 是否为 NotFound
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::NotFound(_) => tonic::Code::NotFound,
            Self::Validation(_) => tonic::Code::InvalidArgument,
            Self::Conflict(_) => tonic::Code::AlreadyExists,
            Self::Internal(_) => tonic::Code::Internal,
        }
    }

    /// 用于日志和指标标签的短名称
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        tonic::Status::new(err.grpc_code(), err.to_string())
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_grpc_not_found() {
        let err = AppError::not_found("part with id abc not found");
        assert!(err.is_not_found());
        assert_eq!(err.grpc_code(), tonic::Code::NotFound);

        let status: tonic::Status = err.into();
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "Not found: part with id abc not found");
    }

    #[test]
    fn test_grpc_code_mapping() {
        assert_eq!(
            AppError::validation("x").grpc_code(),
            tonic::Code::InvalidArgument
        );
        assert_eq!(AppError::conflict("x").grpc_code(), tonic::Code::AlreadyExists);
        assert_eq!(AppError::internal("x").grpc_code(), tonic::Code::Internal);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(AppError::not_found("x").kind(), "not_found");
        assert_eq!(AppError::internal("x").kind(), "internal");
    }
}
