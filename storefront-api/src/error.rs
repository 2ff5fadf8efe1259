use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Quantity recompute failed for product {product_id}: {message}")]
    RecomputeError { product_id: i64, message: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
