//! Error types for the Fax runtime
//!
//! Generated code can hit exactly two contract violations:
//!
//! - `NullReference` - a checked pointer was built over (or read from) null
//! - `IndexOutOfRange` - a checked array was indexed outside `[0, len)`
//!
//! Both messages carry the `Fax-lang:` prefix so a violation raised by the
//! runtime is never confused with a host-level crash.

use std::fmt;
use thiserror::Error;

/// Message used for every null indirection.
pub const NULL_REFERENCE_MESSAGE: &str = "Fax-lang: Null pointer access attempt";

/// Prefix shared by every bounds violation message.
pub const INDEX_OUT_OF_RANGE_MESSAGE: &str = "Fax-lang: Array index out of bounds";

/// A Fax-lang contract violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RuntimeError {
    /// Indirection through a null or unset `Ptr`
    #[error("Fax-lang: Null pointer access attempt")]
    NullReference,

    /// Indexed access outside the array
    ///
    /// `index` is widened to `i128` so both negative signed indices and the
    /// full `usize` range are reported as written.
    #[error("Fax-lang: Array index out of bounds (index {index}, length {len})")]
    IndexOutOfRange { index: i128, len: usize },
}

impl RuntimeError {
    /// Which of the two violation kinds this is
    pub fn kind(&self) -> ViolationKind {
        match self {
            RuntimeError::NullReference => ViolationKind::NullReference,
            RuntimeError::IndexOutOfRange { .. } => ViolationKind::IndexOutOfRange,
        }
    }

    pub(crate) fn out_of_range(index: impl Into<i128>, len: usize) -> Self {
        RuntimeError::IndexOutOfRange {
            index: index.into(),
            len,
        }
    }
}

/// The violation taxonomy exposed to generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    NullReference,
    IndexOutOfRange,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::NullReference => f.write_str("NullReferenceError"),
            ViolationKind::IndexOutOfRange => f.write_str("IndexOutOfRangeError"),
        }
    }
}

/// Error type for runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `init` was called after a configuration was already installed
    #[error("Runtime already initialized")]
    AlreadyInitialized,
}

/// Result type alias for checked runtime operations
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reference_message() {
        assert_eq!(RuntimeError::NullReference.to_string(), NULL_REFERENCE_MESSAGE);
    }

    #[test]
    fn test_index_message_carries_position() {
        let err = RuntimeError::out_of_range(7u64, 3);
        let msg = err.to_string();
        assert!(msg.starts_with(INDEX_OUT_OF_RANGE_MESSAGE));
        assert!(msg.contains("index 7"));
        assert!(msg.contains("length 3"));
    }

    #[test]
    fn test_negative_index_reported_as_written() {
        let err = RuntimeError::out_of_range(-1i64, 0);
        assert_eq!(err, RuntimeError::IndexOutOfRange { index: -1, len: 0 });
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(RuntimeError::NullReference.kind().to_string(), "NullReferenceError");
        assert_eq!(
            RuntimeError::out_of_range(0i32, 0).kind().to_string(),
            "IndexOutOfRangeError"
        );
    }
}
