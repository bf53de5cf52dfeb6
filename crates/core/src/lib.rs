//! Collection metadata model
//!
//! This crate defines the in-memory representation of a data collection:
//! - DataType: Opaque field type tag with the supported enumeration
//! - Timestamp: Second-precision creation time
//! - FieldSchema / FieldMeta: Caller descriptor and owned schema entry
//! - Collection: Identity, ordered schema, segment and partition references
//! - Limits / validation: Opt-in name and dimension checks
//! - Error: Validation error hierarchy
//!
//! Encodings live in the `collection-meta-codec` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod data_type;
pub mod error;
pub mod field;
pub mod limits;
pub mod timestamp;
pub mod validation;

pub use collection::Collection;
pub use data_type::DataType;
pub use error::{NameKind, Result, ValidationError};
pub use field::{FieldMeta, FieldSchema, DEFAULT_DIMENSION};
pub use limits::Limits;
pub use timestamp::Timestamp;
pub use validation::{
    validate_collection_name, validate_dimension, validate_field_name, validate_partition_tag,
};
