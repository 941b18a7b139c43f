//! Error types for the pizack library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all kitchen operations.
#[derive(Error, Debug)]
pub enum PizackError {
    /// Durable storage could not be read or written
    #[error("Storage error at path '{path}': {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Order not found for the given ID
    #[error("Order with ID {id} not found")]
    OrderNotFound { id: String },
    /// Topping not found within the given order
    #[error("Topping with ID {id} not found in order {order_id}")]
    SubTaskNotFound { order_id: String, id: String },
    /// Order cannot be baked yet
    #[error("Order {id} is not ready to bake: {reason}")]
    OrderNotReady { id: String, reason: String },
    /// Order has already been baked
    #[error("Order {id} has already been baked")]
    AlreadyCompleted { id: String },
    /// The background writer could not save the latest snapshot
    #[error("Failed to save orders: {message}")]
    SaveFailed { message: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PizackError {
        PizackError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating "not ready to bake" errors.
pub struct NotReadyBuilder {
    id: String,
}

impl NotReadyBuilder {
    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PizackError {
        PizackError::OrderNotReady {
            id: self.id,
            reason: reason.into(),
        }
    }
}

impl PizackError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for completion precondition errors.
    pub fn not_ready(id: impl Into<String>) -> NotReadyBuilder {
        NotReadyBuilder { id: id.into() }
    }

    /// Creates a storage error for the given path.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait StorageResultExt<T> {
    /// Map I/O errors to [`PizackError::Storage`] for `path`.
    fn storage_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, std::io::Error> {
    fn storage_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| PizackError::storage(path, e))
    }
}

/// Result type alias for kitchen operations
pub type Result<T> = std::result::Result<T, PizackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PizackError::invalid_input("title").with_reason("Title cannot be empty");
        match err {
            PizackError::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert_eq!(reason, "Title cannot be empty");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_not_ready_message() {
        let err = PizackError::not_ready("abc").with_reason("no toppings");
        assert_eq!(
            err.to_string(),
            "Order abc is not ready to bake: no toppings"
        );
    }

    #[test]
    fn test_storage_context() {
        let io: std::io::Result<()> = Err(std::io::Error::other("disk gone"));
        let err = io.storage_context("/tmp/orders.json").unwrap_err();
        assert!(err.to_string().contains("/tmp/orders.json"));
        assert!(err.to_string().contains("disk gone"));
    }
}
