//! Codec errors

/// Errors raised while producing an encoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// A field's type tag is outside the supported enumeration
    ///
    /// Only the structured encoding raises this; the text document carries
    /// raw codes.
    #[error("unsupported data type {code} for field '{field}'")]
    UnsupportedDataType {
        /// Name of the offending field
        field: String,
        /// Raw type code
        code: i32,
    },

    /// A value cannot be represented in the target grammar
    #[error("cannot encode value: {0}")]
    Unrepresentable(String),
}

/// Errors raised while parsing an encoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodingError {
    /// The text is not well-formed
    ///
    /// Line and column are 1-based.
    #[error("syntax error at line {line}, column {column}: {detail}")]
    Syntax {
        /// Human-readable error description
        detail: String,
        /// Line of the offending token
        line: usize,
        /// Column of the offending token
        column: usize,
    },

    /// A known key holds a value of the wrong shape
    #[error("invalid value for '{key}': {detail}")]
    InvalidValue {
        /// Key whose value was rejected
        key: String,
        /// Human-readable error description
        detail: String,
    },

    /// A type tag outside the supported enumeration
    #[error("unknown data type '{0}'")]
    UnknownDataType(String),
}

impl DecodingError {
    /// Create a syntax error at a position.
    pub fn syntax(detail: impl Into<String>, line: usize, column: usize) -> Self {
        DecodingError::Syntax {
            detail: detail.into(),
            line,
            column,
        }
    }

    /// Create an invalid-value error for a key.
    pub fn invalid(key: impl Into<String>, detail: impl Into<String>) -> Self {
        DecodingError::InvalidValue {
            key: key.into(),
            detail: detail.into(),
        }
    }
}

/// Any codec failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Encoding failed
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Decoding failed
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    /// No codec is registered under this identifier
    #[error("Unknown codec: {0}")]
    UnknownCodec(String),
}
