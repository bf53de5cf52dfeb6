//! Field type tags
//!
//! A schema field carries a type tag drawn from a fixed, closed enumeration of
//! scalar and vector types. The model itself treats the tag as an opaque
//! integer code: any value can be stored and it is preserved bit-for-bit by
//! the text document encoding. Only the structured encoding insists that the
//! code belongs to the supported set.
//!
//! ## Supported Types
//!
//! | Name | Code | Kind |
//! |------|------|------|
//! | NONE | 0 | placeholder |
//! | BOOL | 1 | scalar |
//! | INT8 | 2 | scalar |
//! | INT16 | 3 | scalar |
//! | INT32 | 4 | scalar |
//! | INT64 | 5 | scalar |
//! | FLOAT | 10 | scalar |
//! | DOUBLE | 11 | scalar |
//! | STRING | 20 | scalar |
//! | VECTOR_BINARY | 100 | vector |
//! | VECTOR_FLOAT | 101 | vector |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque field type tag
///
/// A transparent wrapper over the integer code. Construction never fails, so
/// tags produced by a newer schema enumeration survive a decode/encode cycle
/// through the text document unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataType(i32);

impl DataType {
    /// No type
    pub const NONE: DataType = DataType(0);
    /// Boolean
    pub const BOOL: DataType = DataType(1);
    /// 8-bit integer
    pub const INT8: DataType = DataType(2);
    /// 16-bit integer
    pub const INT16: DataType = DataType(3);
    /// 32-bit integer
    pub const INT32: DataType = DataType(4);
    /// 64-bit integer
    pub const INT64: DataType = DataType(5);
    /// 32-bit float
    pub const FLOAT: DataType = DataType(10);
    /// 64-bit float
    pub const DOUBLE: DataType = DataType(11);
    /// UTF-8 string
    pub const STRING: DataType = DataType(20);
    /// Packed binary vector
    pub const VECTOR_BINARY: DataType = DataType(100);
    /// 32-bit float vector
    pub const VECTOR_FLOAT: DataType = DataType(101);

    /// Every supported type tag, in code order
    pub const ALL: [DataType; 11] = [
        DataType::NONE,
        DataType::BOOL,
        DataType::INT8,
        DataType::INT16,
        DataType::INT32,
        DataType::INT64,
        DataType::FLOAT,
        DataType::DOUBLE,
        DataType::STRING,
        DataType::VECTOR_BINARY,
        DataType::VECTOR_FLOAT,
    ];

    /// Wrap a raw code. Unsupported codes are accepted as-is.
    #[inline]
    pub const fn from_code(code: i32) -> Self {
        DataType(code)
    }

    /// The raw integer code
    #[inline]
    pub const fn code(&self) -> i32 {
        self.0
    }

    /// Canonical enumeration name, or `None` for an unsupported code
    pub const fn name(&self) -> Option<&'static str> {
        match self.0 {
            0 => Some("NONE"),
            1 => Some("BOOL"),
            2 => Some("INT8"),
            3 => Some("INT16"),
            4 => Some("INT32"),
            5 => Some("INT64"),
            10 => Some("FLOAT"),
            11 => Some("DOUBLE"),
            20 => Some("STRING"),
            100 => Some("VECTOR_BINARY"),
            101 => Some("VECTOR_FLOAT"),
            _ => None,
        }
    }

    /// Parse a canonical enumeration name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        DataType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == Some(name))
    }

    /// Whether the code belongs to the supported enumeration
    #[inline]
    pub const fn is_supported(&self) -> bool {
        self.name().is_some()
    }

    /// Whether this is one of the vector types
    #[inline]
    pub const fn is_vector(&self) -> bool {
        matches!(self.0, 100 | 101)
    }

    /// Whether this is the packed binary vector type
    #[inline]
    pub const fn is_binary_vector(&self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<i32> for DataType {
    fn from(code: i32) -> Self {
        DataType::from_code(code)
    }
}

impl From<DataType> for i32 {
    fn from(t: DataType) -> Self {
        t.0
    }
}

// ============================================================================
// Tests
// ============================================================================
