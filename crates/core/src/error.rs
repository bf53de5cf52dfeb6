//! Error types for the collection model
//!
//! Construction never fails. The only fallible model operation is the opt-in
//! validation pass, which reports its findings through [`ValidationError`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::fmt;
use thiserror::Error;

/// Result type alias for validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Which kind of name failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// Collection name
    Collection,
    /// Schema field name
    Field,
    /// Partition tag
    PartitionTag,
}

impl NameKind {
    /// Human-readable label used in error messages
    pub const fn label(&self) -> &'static str {
        match self {
            NameKind::Collection => "collection name",
            NameKind::Field => "field name",
            NameKind::PartitionTag => "partition tag",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty after trimming
    #[error("{kind} should not be empty")]
    EmptyName {
        /// What was being named
        kind: NameKind,
    },

    /// Name exceeds the configured maximum length
    #[error("invalid {kind} '{name}': length {length} exceeds maximum {max}")]
    NameTooLong {
        /// What was being named
        kind: NameKind,
        /// The offending name
        name: String,
        /// Actual length in bytes
        length: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Name starts with a disallowed character
    #[error("invalid {kind} '{name}': cannot start with '{char}'")]
    InvalidStart {
        /// What was being named
        kind: NameKind,
        /// The offending name
        name: String,
        /// The invalid first character
        char: char,
    },

    /// Name contains a disallowed character
    #[error("invalid {kind} '{name}': invalid character '{char}' at position {position}")]
    InvalidChar {
        /// What was being named
        kind: NameKind,
        /// The offending name
        name: String,
        /// The invalid character
        char: char,
        /// Character position within the trimmed name
        position: usize,
    },

    /// Two schema fields share a name
    #[error("duplicate field name '{name}'")]
    DuplicateField {
        /// The repeated name
        name: String,
    },

    /// Vector dimension outside `1..=max`
    #[error("invalid dimension {dimension} for field '{field}': should be in range 1 ~ {max}")]
    InvalidDimension {
        /// Field name
        field: String,
        /// Offending dimension
        dimension: i64,
        /// Maximum allowed dimension
        max: i64,
    },

    /// Binary vector dimension not a multiple of 8
    #[error("invalid dimension {dimension} for binary field '{field}': should be multiple of 8")]
    UnalignedBinaryDimension {
        /// Field name
        field: String,
        /// Offending dimension
        dimension: i64,
    },
}
