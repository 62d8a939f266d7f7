//! Error types for the pq-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unsupported catalog format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("Fan not found: {0}")]
    FanNotFound(String),

    #[error("Filter not found: {0}")]
    FilterNotFound(String),

    #[error("Unknown filter size '{size}' for filter '{filter}'")]
    SizeNotFound { filter: String, size: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pq-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pq_catalog::CatalogError> for AppError {
    fn from(err: pq_catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}
