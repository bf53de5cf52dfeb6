//! Collection metadata model and its encodings
//!
//! A collection's identity, ordered schema and physical placement, plus two
//! canonical encodings for moving it across process and storage boundaries:
//! the structured metadata encoding persisted to the metadata store, and a
//! general-purpose text document.
//!
//! # Quick Start
//!
//! ```
//! use collection_meta::{
//!     encode_structured, from_text_document, to_text_document, Collection, DataType,
//!     FieldSchema, Timestamp,
//! };
//!
//! let mut c = Collection::new(
//!     1,
//!     "c0",
//!     Timestamp::now(),
//!     &[FieldSchema::new("vec", DataType::VECTOR_FLOAT)],
//!     &[100, 101],
//!     &["p0"],
//! );
//!
//! // Encoding is pure; caching the result is explicit
//! let text = encode_structured(&c).unwrap();
//! c.update_cache(text);
//!
//! let doc = to_text_document(&c).unwrap();
//! assert_eq!(from_text_document(&doc).unwrap(), c);
//! ```
//!
//! # Architecture
//!
//! - [`model`]: the collection model (`collection-meta-core`)
//! - [`codec`]: mapping tables and both encodings (`collection-meta-codec`)

pub use collection_meta_codec as codec;
pub use collection_meta_core as model;

pub use collection_meta_codec::{
    codec_for_id, decode_structured, encode_structured, from_text_document,
    to_structured_encoding, to_text_document, to_text_document_pretty, CodecError,
    CollectionCodec, CollectionMeta, DecodingError, DocumentCodec, EncodingError,
    StructuredCodec,
};
pub use collection_meta_core::{
    Collection, DataType, FieldMeta, FieldSchema, Limits, Timestamp, ValidationError,
    DEFAULT_DIMENSION,
};
