use spacecraft_errors::AppError;
use thiserror::Error;
use tonic::Status;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed data: {0}")]
    SeedParse(#[from] serde_json::Error),
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<InventoryError> for AppError {
    fn from(error: InventoryError) -> Self {
        match error {
            InventoryError::SeedIo { .. } => AppError::Internal(error.to_string()),
            InventoryError::SeedParse(_) => AppError::Validation(error.to_string()),
            InventoryError::App(e) => e,
        }
    }
}

impl From<InventoryError> for Status {
    fn from(error: InventoryError) -> Self {
        AppError::from(error).into()
    }
}
