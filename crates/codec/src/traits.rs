//! Codec trait definitions.

use crate::document::{encode_document, from_text_document};
use crate::error::{CodecError, DecodingError, EncodingError};
use crate::structured::{decode_structured, encode_structured};
use collection_meta_core::Collection;

/// Collection codec trait.
///
/// Every encoding of a [`Collection`] goes through a codec. Encoding never
/// mutates the collection; caching an encoding is the caller's decision.
///
/// # Thread Safety
///
/// Codecs must be `Send + Sync` so one instance can serve concurrent
/// encodes of distinct collections.
///
/// # Codec Identity
///
/// Each codec has a unique identifier so a stored encoding can record which
/// codec produced it.
pub trait CollectionCodec: Send + Sync {
    /// Encode a collection to text.
    fn encode(&self, collection: &Collection) -> Result<String, EncodingError>;

    /// Decode text produced by [`encode`](CollectionCodec::encode).
    ///
    /// Fields the encoding does not carry come back with their defaults.
    fn decode(&self, text: &str) -> Result<Collection, DecodingError>;

    /// Unique codec identifier.
    fn codec_id(&self) -> &str;
}

/// Structured metadata codec.
///
/// Decoding yields a collection with an empty name and default dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredCodec;

impl CollectionCodec for StructuredCodec {
    fn encode(&self, collection: &Collection) -> Result<String, EncodingError> {
        encode_structured(collection)
    }

    fn decode(&self, text: &str) -> Result<Collection, DecodingError> {
        Ok(decode_structured(text)?.into_collection(String::new()))
    }

    fn codec_id(&self) -> &str {
        "structured"
    }
}

/// Text document codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCodec {
    /// Indent the output
    pub pretty: bool,
}

impl DocumentCodec {
    /// Codec producing indented documents
    pub fn pretty() -> Self {
        DocumentCodec { pretty: true }
    }
}

impl CollectionCodec for DocumentCodec {
    fn encode(&self, collection: &Collection) -> Result<String, EncodingError> {
        encode_document(collection, self.pretty)
    }

    fn decode(&self, text: &str) -> Result<Collection, DecodingError> {
        from_text_document(text)
    }

    fn codec_id(&self) -> &str {
        "document"
    }
}

/// Look up a codec by identifier.
pub fn codec_for_id(codec_id: &str) -> Result<Box<dyn CollectionCodec>, CodecError> {
    match codec_id {
        "structured" => Ok(Box::new(StructuredCodec)),
        "document" => Ok(Box::new(DocumentCodec::default())),
        other => Err(CodecError::UnknownCodec(other.to_string())),
    }
}
