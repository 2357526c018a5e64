use crate::domain::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.quantity_missing")]
    QuantityMissing,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

/// Coarse classification used by outer layers to pick a transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::NameEmpty | ProductError::QuantityMissing => ErrorKind::Validation,
            ProductError::NotFound | ProductError::Repository(RepositoryError::NotFound) => {
                ErrorKind::NotFound
            }
            ProductError::Repository(RepositoryError::DatabaseError(_)) => ErrorKind::Storage,
        }
    }

    /// Lifts a repository error, folding its not-found sentinel into `ProductError::NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
