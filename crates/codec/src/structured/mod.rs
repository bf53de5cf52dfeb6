//! Structured metadata encoding
//!
//! The persistence-oriented form consumed by the metadata store. It carries
//! the wire record `{id, schema: {fields: [{name, dataType}]}, createTime,
//! segmentIds, partitionTags}` as indented text:
//!
//! ```text
//! id: 1
//! schema: {
//!   fields: [
//!     {
//!       name: "vec"
//!       dataType: VECTOR_FLOAT
//!     }
//!   ]
//! }
//! createTime: 1700000000
//! segmentIds: [100, 101]
//! partitionTags: ["p0"]
//! ```
//!
//! The collection name, cached encoding and field dimensions are not carried.
//! Type tags are written by name, so a tag outside the supported
//! enumeration cannot be encoded.
//!
//! # Determinism
//!
//! Keys follow the [`STRUCTURED`] table order and lists follow model order,
//! so encoding an unchanged collection always yields identical text.

mod parser;
mod writer;

use crate::error::{DecodingError, EncodingError};
use crate::mapping::{CollectionField, Mapping, SchemaField, STRUCTURED};
use collection_meta_core::{Collection, DataType, FieldMeta, FieldSchema, Timestamp};

/// Parsed text tree shared by the writer and the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TextValue {
    /// Integer literal
    Int(i128),
    /// Quoted string
    Str(String),
    /// Bare enumeration name
    Enum(String),
    /// Bracketed list
    List(Vec<TextValue>),
    /// Braced sub-message
    Message(Vec<(String, TextValue)>),
}

impl TextValue {
    fn kind(&self) -> &'static str {
        match self {
            TextValue::Int(_) => "integer",
            TextValue::Str(_) => "string",
            TextValue::Enum(_) => "enum name",
            TextValue::List(_) => "list",
            TextValue::Message(_) => "message",
        }
    }
}

/// Schema section of the wire record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionSchema {
    /// Fields in declaration order
    pub fields: Vec<FieldSchema>,
}

/// The wire record carried by the structured encoding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionMeta {
    /// Collection id
    pub id: u64,
    /// Ordered schema
    pub schema: CollectionSchema,
    /// Creation time
    pub create_time: Timestamp,
    /// Segment ids
    pub segment_ids: Vec<u64>,
    /// Partition tags
    pub partition_tags: Vec<String>,
}

impl CollectionMeta {
    /// Project a collection onto the wire record
    pub fn from_collection(collection: &Collection) -> Self {
        CollectionMeta {
            id: collection.id(),
            schema: CollectionSchema {
                fields: collection
                    .schema()
                    .iter()
                    .map(|f| FieldSchema::new(f.field_name.clone(), f.data_type))
                    .collect(),
            },
            create_time: collection.create_time(),
            segment_ids: collection.segment_ids().to_vec(),
            partition_tags: collection.partition_tags().to_vec(),
        }
    }

    /// Rebuild a collection under the given name
    ///
    /// Dimensions are not carried by this encoding, so every field receives
    /// the default dimension.
    pub fn into_collection(self, name: impl Into<String>) -> Collection {
        Collection::new(
            self.id,
            name,
            self.create_time,
            &self.schema.fields,
            &self.segment_ids,
            &self.partition_tags[..],
        )
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a collection without touching its cache
pub fn encode_structured(collection: &Collection) -> Result<String, EncodingError> {
    let entries = collection_entries(collection)?;
    let text = writer::render(&entries);
    tracing::debug!(
        collection_id = collection.id(),
        fields = collection.schema().len(),
        bytes = text.len(),
        "encoded structured collection metadata"
    );
    Ok(text)
}

/// Clear the cache, encode, and store the result in the cache
///
/// Returns the same text that is now cached. On failure the cache is left
/// cleared.
pub fn to_structured_encoding(collection: &mut Collection) -> Result<String, EncodingError> {
    collection.clear_cache();
    let text = encode_structured(collection)?;
    collection.update_cache(text.clone());
    Ok(text)
}

fn collection_entries(c: &Collection) -> Result<Vec<(String, TextValue)>, EncodingError> {
    let mut entries = Vec::new();
    for (field, mapping) in STRUCTURED.collection_fields() {
        let value = match field {
            CollectionField::Id => TextValue::Int(c.id().into()),
            CollectionField::Name => TextValue::Str(c.name().to_string()),
            CollectionField::CreateTime => TextValue::Int(c.create_time().as_secs().into()),
            CollectionField::Schema => TextValue::List(
                c.schema()
                    .iter()
                    .map(field_entry)
                    .collect::<Result<_, _>>()?,
            ),
            CollectionField::SegmentIds => TextValue::List(
                c.segment_ids()
                    .iter()
                    .map(|&id| TextValue::Int(id.into()))
                    .collect(),
            ),
            CollectionField::PartitionTags => TextValue::List(
                c.partition_tags()
                    .iter()
                    .map(|t| TextValue::Str(t.clone()))
                    .collect(),
            ),
            CollectionField::CachedEncoding => {
                TextValue::Str(c.cached_encoding().unwrap_or_default().to_string())
            }
        };
        match mapping {
            Mapping::Key(key) => entries.push((key.to_string(), value)),
            Mapping::Nested { key, inner } => entries.push((
                key.to_string(),
                TextValue::Message(vec![(inner.to_string(), value)]),
            )),
            Mapping::Omit => {}
        }
    }
    Ok(entries)
}

fn field_entry(field: &FieldMeta) -> Result<TextValue, EncodingError> {
    let mut entries = Vec::new();
    for (schema_field, mapping) in STRUCTURED.schema_fields() {
        let value = match schema_field {
            SchemaField::FieldName => TextValue::Str(field.field_name.clone()),
            SchemaField::DataType => match field.data_type.name() {
                Some(name) => TextValue::Enum(name.to_string()),
                None => {
                    tracing::warn!(
                        field = %field.field_name,
                        code = field.data_type.code(),
                        "unsupported data type in structured encoding"
                    );
                    return Err(EncodingError::UnsupportedDataType {
                        field: field.field_name.clone(),
                        code: field.data_type.code(),
                    });
                }
            },
            SchemaField::Dimension => TextValue::Int(field.dimension.into()),
        };
        if let Some(key) = mapping.key() {
            entries.push((key.to_string(), value));
        }
    }
    Ok(TextValue::Message(entries))
}

// ============================================================================
// Decoding
// ============================================================================

/// Parse structured text back into the wire record
///
/// Unknown keys are skipped and missing keys keep their zero value. When a
/// key repeats, the last occurrence wins.
pub fn decode_structured(text: &str) -> Result<CollectionMeta, DecodingError> {
    let entries = parser::parse(text).map_err(|e| {
        tracing::warn!(error = %e, "malformed structured collection metadata");
        e
    })?;

    let mut meta = CollectionMeta::default();
    for (key, value) in entries {
        let Some((field, mapping)) = STRUCTURED.collection_field_for_key(&key) else {
            continue;
        };
        let value = match mapping {
            Mapping::Nested { inner, .. } => match unwrap_nested(&key, value, inner)? {
                Some(v) => v,
                None => continue,
            },
            _ => value,
        };
        match field {
            CollectionField::Id => meta.id = expect_u64(&key, value)?,
            CollectionField::CreateTime => {
                meta.create_time = Timestamp::from_secs(expect_u64(&key, value)?)
            }
            CollectionField::Schema => {
                meta.schema.fields = expect_list(&key, value)?
                    .into_iter()
                    .map(|item| field_from_tree(&key, item))
                    .collect::<Result<_, _>>()?
            }
            CollectionField::SegmentIds => {
                meta.segment_ids = expect_list(&key, value)?
                    .into_iter()
                    .map(|item| expect_u64(&key, item))
                    .collect::<Result<_, _>>()?
            }
            CollectionField::PartitionTags => {
                meta.partition_tags = expect_list(&key, value)?
                    .into_iter()
                    .map(|item| expect_str(&key, item))
                    .collect::<Result<_, _>>()?
            }
            CollectionField::Name | CollectionField::CachedEncoding => {}
        }
    }

    tracing::debug!(
        collection_id = meta.id,
        fields = meta.schema.fields.len(),
        "decoded structured collection metadata"
    );
    Ok(meta)
}

fn unwrap_nested(
    key: &str,
    value: TextValue,
    inner: &str,
) -> Result<Option<TextValue>, DecodingError> {
    match value {
        TextValue::Message(entries) => Ok(entries
            .into_iter()
            .filter(|(k, _)| k == inner)
            .map(|(_, v)| v)
            .last()),
        other => Err(mismatch(key, "message", &other)),
    }
}

fn field_from_tree(key: &str, value: TextValue) -> Result<FieldSchema, DecodingError> {
    let entries = match value {
        TextValue::Message(entries) => entries,
        other => return Err(mismatch(key, "message", &other)),
    };
    let mut field = FieldSchema::default();
    for (field_key, value) in entries {
        match STRUCTURED.schema_field_for_key(&field_key) {
            Some(SchemaField::FieldName) => field.name = expect_str(&field_key, value)?,
            Some(SchemaField::DataType) => field.data_type = expect_data_type(&field_key, value)?,
            Some(SchemaField::Dimension) | None => {}
        }
    }
    Ok(field)
}

fn expect_u64(key: &str, value: TextValue) -> Result<u64, DecodingError> {
    match value {
        TextValue::Int(n) => u64::try_from(n)
            .map_err(|_| DecodingError::invalid(key, format!("{} is out of range for u64", n))),
        other => Err(mismatch(key, "integer", &other)),
    }
}

fn expect_str(key: &str, value: TextValue) -> Result<String, DecodingError> {
    match value {
        TextValue::Str(s) => Ok(s),
        other => Err(mismatch(key, "string", &other)),
    }
}

fn expect_list(key: &str, value: TextValue) -> Result<Vec<TextValue>, DecodingError> {
    match value {
        TextValue::List(items) => Ok(items),
        other => Err(mismatch(key, "list", &other)),
    }
}

fn expect_data_type(key: &str, value: TextValue) -> Result<DataType, DecodingError> {
    match value {
        TextValue::Enum(name) => {
            DataType::from_name(&name).ok_or(DecodingError::UnknownDataType(name))
        }
        TextValue::Int(code) => i32::try_from(code)
            .ok()
            .map(DataType::from_code)
            .filter(DataType::is_supported)
            .ok_or_else(|| DecodingError::UnknownDataType(code.to_string())),
        other => Err(mismatch(key, "enum name", &other)),
    }
}

fn mismatch(key: &str, expected: &str, found: &TextValue) -> DecodingError {
    DecodingError::invalid(key, format!("expected {}, found {}", expected, found.kind()))
}
