//! Schema field descriptors
//!
//! Two shapes describe a field:
//! - [`FieldSchema`]: the descriptor callers hand to [`Collection::new`](crate::Collection::new)
//! - [`FieldMeta`]: the entry the collection owns, which adds a dimension

use crate::data_type::DataType;
use serde::{Deserialize, Serialize};

/// Dimension assigned to every field at construction
///
/// Applied uniformly, scalar fields included. Callers needing another value
/// set it explicitly afterwards.
pub const DEFAULT_DIMENSION: i64 = 16;

/// Caller-supplied field descriptor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSchema {
    /// Field name
    pub name: String,
    /// Type tag
    pub data_type: DataType,
    /// Free-form description; not carried into the collection
    pub description: String,
}

impl FieldSchema {
    /// Create a descriptor with no description
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        FieldSchema {
            name: name.into(),
            data_type,
            description: String::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One field of a collection schema
///
/// The serde form is the schema entry of the text document: keys
/// `field_name`, `type` and `dimension`, missing keys taking zero values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMeta {
    /// Field name, unique within a schema by caller discipline
    pub field_name: String,
    /// Type tag, preserved bit-for-bit
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Vector dimension
    pub dimension: i64,
}

impl FieldMeta {
    /// Create a field with an explicit dimension
    pub fn new(field_name: impl Into<String>, data_type: DataType, dimension: i64) -> Self {
        FieldMeta {
            field_name: field_name.into(),
            data_type,
            dimension,
        }
    }
}

impl From<&FieldSchema> for FieldMeta {
    fn from(schema: &FieldSchema) -> Self {
        FieldMeta::new(schema.name.clone(), schema.data_type, DEFAULT_DIMENSION)
    }
}
