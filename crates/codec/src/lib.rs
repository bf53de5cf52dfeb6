//! Encodings for the collection metadata model
//!
//! Two independent encodings of a [`Collection`](collection_meta_core::Collection):
//! - Structured: the persistence form for the metadata store; carries id,
//!   schema (name and type tag per field), creation time, segment ids and
//!   partition tags
//! - Document: a JSON text document of the whole collection
//!
//! Both are driven by the field-mapping tables in [`mapping`].
//!
//! ## Usage
//!
//! ```
//! use collection_meta_codec::{from_text_document, to_structured_encoding, to_text_document};
//! use collection_meta_core::{Collection, DataType, FieldSchema, Timestamp};
//!
//! let mut c = Collection::new(
//!     1,
//!     "c0",
//!     Timestamp::from_secs(1_700_000_000),
//!     &[FieldSchema::new("vec", DataType::VECTOR_FLOAT)],
//!     &[100, 101],
//!     &["p0"],
//! );
//! let structured = to_structured_encoding(&mut c).unwrap();
//! assert!(structured.contains("segmentIds: [100, 101]"));
//!
//! let doc = to_text_document(&c).unwrap();
//! assert_eq!(from_text_document(&doc).unwrap(), c);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod mapping;
pub mod structured;
pub mod traits;

pub use document::{from_text_document, to_text_document, to_text_document_pretty};
pub use error::{CodecError, DecodingError, EncodingError};
pub use mapping::{CollectionField, FieldMap, Mapping, SchemaField, DOCUMENT, STRUCTURED};
pub use structured::{
    decode_structured, encode_structured, to_structured_encoding, CollectionMeta, CollectionSchema,
};
pub use traits::{codec_for_id, CollectionCodec, DocumentCodec, StructuredCodec};
