use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input field failed validation.
    #[error("{0}")]
    Validation(String),
    /// The request target (product, or the category in a by-category listing)
    /// does not exist or is inactive.
    #[error("{0}")]
    NotFound(String),
    /// A referenced category is missing or inactive where a product operation
    /// depends on it. Distinct from NotFound: the product itself may exist.
    #[error("{0}")]
    CategoryUnavailable(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
