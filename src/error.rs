//! Error types shared by the cache and store contracts
//!
//! Provides a closed error taxonomy using thiserror. Callers branch on
//! [`ContractError::kind`], never on message text.

use thiserror::Error;

// == Error Kind ==
/// Identity of a [`ContractError`], comparable with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operation unsupported by this backend
    NotImplemented,
    /// Requested key is absent where absence is an error
    KeyNotFound,
    /// Backend-specific failure
    Backend,
}

// == Contract Error Enum ==
/// Error returned by contract operations.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The backend deliberately does not support the operation
    #[error("not implemented")]
    NotImplemented,

    /// The key is not present
    #[error("key not found")]
    KeyNotFound,

    /// Connectivity, serialization or storage-medium failure
    #[error("backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ContractError {
    /// Wraps a backend-specific failure.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ContractError::Backend(err.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::NotImplemented => ErrorKind::NotImplemented,
            ContractError::KeyNotFound => ErrorKind::KeyNotFound,
            ContractError::Backend(_) => ErrorKind::Backend,
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        self.kind() == ErrorKind::NotImplemented
    }

    pub fn is_key_not_found(&self) -> bool {
        self.kind() == ErrorKind::KeyNotFound
    }
}

impl PartialEq<ErrorKind> for ContractError {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind() == *other
    }
}

// == Result Type Alias ==
/// Convenience Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
