use crate::domain::errors::RepositoryError;

/// A single field of a creation payload that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, code: &'static str) -> Self {
        Self { field, code }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShoppingItemError {
    #[error("shopping_item.validation_failed")]
    ValidationFailed(Vec<FieldViolation>),
    #[error("shopping_item.not_found")]
    NotFound,
    #[error("shopping_item.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ShoppingItemError {
    /// Maps store failures on insert, turning a key clash into `AlreadyExists`.
    pub fn from_insert(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicated => ShoppingItemError::AlreadyExists,
            other => ShoppingItemError::Repository(other),
        }
    }
}
