/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for container and cursor operations
pub type ListResult<T> = Result<T, ListError>;

/// Fieldless classification of a [`ListError`], convenient for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NullArgument,
    ArgumentOutOfRange,
    InvalidArgument,
    InvalidCast,
    NullReference,
    NotSupported,
    InvalidOperation,
    MissingConstructor,
}

/// Errors raised by synchronized containers and typed cursors
///
/// Every error is raised before the container is mutated, so a failed call
/// leaves the container exactly as it was.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ListError {
    #[error("Argument '{name}' cannot be null")]
    #[diagnostic(
        code(list::null_argument),
        help("Supply a source or element. Non-null lists reject None on every write.")
    )]
    NullArgument { name: String },

    #[error("Argument '{name}' out of range: {index} (length {len})")]
    #[diagnostic(
        code(list::argument_out_of_range),
        help("Indices must lie within the current bounds of the list.")
    )]
    ArgumentOutOfRange { name: String, index: usize, len: usize },

    #[error("Invalid argument '{name}': {reason}")]
    #[diagnostic(code(list::invalid_argument))]
    InvalidArgument { name: String, reason: String },

    #[error("Cannot cast {found} to {expected}")]
    #[diagnostic(
        code(list::invalid_cast),
        help("The untyped value does not have the element type of this list.")
    )]
    InvalidCast { expected: String, found: String },

    #[error("Null value cannot be read as {expected}")]
    #[diagnostic(
        code(list::null_reference),
        help("Use current_nullable() when the source may contain null values.")
    )]
    NullReference { expected: String },

    #[error("Operation not supported: {operation}")]
    #[diagnostic(
        code(list::not_supported),
        help("Read-only lists cannot be modified after construction.")
    )]
    NotSupported { operation: String },

    #[error("Invalid operation: {reason}")]
    #[diagnostic(code(list::invalid_operation))]
    InvalidOperation { reason: String },

    #[error("No parameterless constructor available for {type_name}")]
    #[diagnostic(
        code(list::missing_constructor),
        help("Provide an item factory that can build every element.")
    )]
    MissingConstructor { type_name: String },
}

impl ListError {
    #[inline]
    pub fn null_argument(name: &str) -> Self {
        Self::NullArgument {
            name: name.to_string(),
        }
    }

    #[inline]
    pub fn out_of_range(name: &str, index: usize, len: usize) -> Self {
        Self::ArgumentOutOfRange {
            name: name.to_string(),
            index,
            len,
        }
    }

    #[inline]
    pub fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Cast failure from an untyped value to `T`
    pub fn invalid_cast<T: ?Sized>(found: impl Into<String>) -> Self {
        Self::InvalidCast {
            expected: std::any::type_name::<T>().to_string(),
            found: found.into(),
        }
    }

    pub fn null_reference<T: ?Sized>() -> Self {
        Self::NullReference {
            expected: std::any::type_name::<T>().to_string(),
        }
    }

    #[inline]
    pub fn not_supported(operation: &str) -> Self {
        Self::NotSupported {
            operation: operation.to_string(),
        }
    }

    #[inline]
    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            reason: reason.into(),
        }
    }

    pub fn missing_constructor<T: ?Sized>() -> Self {
        Self::MissingConstructor {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::ArgumentOutOfRange { .. } => ErrorKind::ArgumentOutOfRange,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::InvalidCast { .. } => ErrorKind::InvalidCast,
            Self::NullReference { .. } => ErrorKind::NullReference,
            Self::NotSupported { .. } => ErrorKind::NotSupported,
            Self::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            Self::MissingConstructor { .. } => ErrorKind::MissingConstructor,
        }
    }
}
