use sea_orm::error::DbErr;

use crate::entities::ProductType;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(
        "Insufficient stock for {product_type} {model_no}. Available: {available}, Requested: {requested}"
    )]
    InsufficientStock {
        product_type: ProductType,
        model_no: String,
        available: i32,
        requested: i32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::ValidationError(format!("Malformed catalog data: {}", err))
    }
}

impl ServiceError {
    pub fn product_not_found(product_type: ProductType, model_no: &str) -> Self {
        ServiceError::NotFound(format!(
            "Product with model_no {} and type {} does not exist",
            model_no, product_type
        ))
    }

    /// Whether an interactive caller can report this error and keep going.
    ///
    /// Bad input, unknown products and stock shortfalls are part of normal
    /// operation; store and IO failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::ValidationError(_) | Self::InsufficientStock { .. }
        )
    }

    /// Short machine-readable kind, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DatabaseError(_) => "database",
            Self::NotFound(_) => "not_found",
            Self::ValidationError(_) => "validation",
            Self::InsufficientStock { .. } => "insufficient_stock",
            Self::Io(_) => "io",
            Self::InternalError(_) => "internal",
        }
    }
}
