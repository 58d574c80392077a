//! Error types for decorated profiles.

use thiserror::Error;

/// Errors that can occur while resolving an operation through a decorator chain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecoratorError {
    /// No layer of the chain, nor the subject underneath, defines the operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl From<String> for DecoratorError {
    fn from(operation: String) -> Self {
        DecoratorError::UnsupportedOperation(operation)
    }
}
