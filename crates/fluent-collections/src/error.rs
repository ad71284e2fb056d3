//! Collection error taxonomy
//!
//! Every fallible List/Dict operation returns [`CollectionResult`]. Errors are
//! raised at the point of violation and never masked by a default value.

use crate::element::ElementKind;
use thiserror::Error;

/// Errors raised by [`List`](crate::List) and [`Dict`](crate::Dict) operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollectionError {
    /// Operation on a container whose backing store was never established
    #[error("{container} is not initialized")]
    Uninitialized { container: &'static str },

    /// List index outside the valid range for the operation
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// Sub-list bounds that do not describe a valid range
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: i64, end: i64, len: usize },

    /// Pop from an empty list
    #[error("list is empty")]
    Empty,

    /// Dict key that does not exist
    #[error("key {key} does not exist")]
    KeyNotFound { key: String },

    /// No dict field holds the requested value
    #[error("value {value} not found")]
    ValueNotFound { value: String },

    /// Element kind does not support the requested operation
    #[error("cannot {operation} elements of kind {kind}")]
    UnsupportedType {
        operation: &'static str,
        kind: ElementKind,
    },

    /// Serializer configuration could not be parsed
    #[error("invalid serializer configuration: {message}")]
    Config { message: String },
}

impl CollectionError {
    /// Name of the error class in the collection error taxonomy.
    ///
    /// Hosts that surface these errors as their own exception types can map
    /// on this instead of matching every variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CollectionError::Uninitialized { .. } => "UninitializedError",
            CollectionError::IndexOutOfRange { .. } | CollectionError::InvalidRange { .. } => {
                "IndexError"
            }
            CollectionError::Empty => "EmptyError",
            CollectionError::KeyNotFound { .. } => "KeyError",
            CollectionError::ValueNotFound { .. } => "ValueError",
            CollectionError::UnsupportedType { .. } => "TypeError",
            CollectionError::Config { .. } => "ConfigError",
        }
    }

    pub(crate) fn uninit_list() -> Self {
        CollectionError::Uninitialized { container: "list" }
    }

    pub(crate) fn uninit_dict() -> Self {
        CollectionError::Uninitialized {
            container: "dictionary",
        }
    }
}

/// Result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;
