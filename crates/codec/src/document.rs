//! Text document encoding
//!
//! A JSON object carrying the whole collection, dimensions and cached
//! structured encoding included:
//!
//! ```text
//! {"id":1,"name":"c0","creat_time":1700000000,
//!  "schema":[{"field_name":"vec","type":101,"dimension":16}],
//!  "segment_ids":[100,101],"partition_tags":["p0"],"grpc_marshal_string":""}
//! ```
//!
//! Keys are spelled and ordered as in the [`DOCUMENT`] table; the spellings
//! are shared with other readers and writers of this format and must not
//! change. Type tags travel as raw integers, so unsupported codes survive.
//!
//! Decoding ignores unknown keys and gives missing or `null` keys their zero
//! value. A bare `null` document decodes to the empty collection.

use crate::error::{DecodingError, EncodingError};
use crate::mapping::{CollectionField, Mapping, SchemaField, DOCUMENT};
use collection_meta_core::{Collection, DataType, FieldMeta, Timestamp};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Encode a collection as a compact text document
pub fn to_text_document(collection: &Collection) -> Result<String, EncodingError> {
    encode_document(collection, false)
}

/// Encode a collection as an indented text document
pub fn to_text_document_pretty(collection: &Collection) -> Result<String, EncodingError> {
    encode_document(collection, true)
}

pub(crate) fn encode_document(collection: &Collection, pretty: bool) -> Result<String, EncodingError> {
    let value = document_value(collection);
    let text = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(|e| EncodingError::Unrepresentable(e.to_string()))?;

    tracing::debug!(
        collection_id = collection.id(),
        fields = collection.schema().len(),
        bytes = text.len(),
        "encoded collection document"
    );
    Ok(text)
}

fn document_value(c: &Collection) -> Value {
    let mut map = Map::new();
    for (field, mapping) in DOCUMENT.collection_fields() {
        let value = match field {
            CollectionField::Id => Value::from(c.id()),
            CollectionField::Name => Value::from(c.name()),
            CollectionField::CreateTime => Value::from(c.create_time().as_secs()),
            CollectionField::Schema => Value::Array(c.schema().iter().map(field_value).collect()),
            CollectionField::SegmentIds => Value::from(c.segment_ids().to_vec()),
            CollectionField::PartitionTags => Value::from(c.partition_tags().to_vec()),
            CollectionField::CachedEncoding => Value::from(c.cached_encoding().unwrap_or_default()),
        };
        place(&mut map, mapping, value);
    }
    Value::Object(map)
}

fn field_value(field: &FieldMeta) -> Value {
    let mut map = Map::new();
    for (schema_field, mapping) in DOCUMENT.schema_fields() {
        let value = match schema_field {
            SchemaField::FieldName => Value::from(field.field_name.as_str()),
            SchemaField::DataType => Value::from(field.data_type.code()),
            SchemaField::Dimension => Value::from(field.dimension),
        };
        place(&mut map, mapping, value);
    }
    Value::Object(map)
}

fn place(map: &mut Map<String, Value>, mapping: Mapping, value: Value) {
    match mapping {
        Mapping::Key(key) => {
            map.insert(key.to_string(), value);
        }
        Mapping::Nested { key, inner } => {
            let mut nested = Map::new();
            nested.insert(inner.to_string(), value);
            map.insert(key.to_string(), Value::Object(nested));
        }
        Mapping::Omit => {}
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Parse a text document back into a collection
///
/// On error no partial collection is produced; callers wanting the empty
/// value can fall back to `Collection::default()`.
pub fn from_text_document(text: &str) -> Result<Collection, DecodingError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        tracing::warn!(error = %e, "malformed collection document");
        DecodingError::syntax(e.to_string(), e.line(), e.column())
    })?;

    let mut object = match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(DecodingError::invalid(
                "document",
                format!("expected object, found {}", kind(&other)),
            ))
        }
    };

    let mut id = 0;
    let mut name = String::new();
    let mut create_time = Timestamp::EPOCH;
    let mut schema = Vec::new();
    let mut segment_ids = Vec::new();
    let mut partition_tags = Vec::new();
    let mut cached_encoding = String::new();

    for (field, mapping) in DOCUMENT.collection_fields() {
        let Some(value) = lookup(&mut object, mapping)? else {
            continue;
        };
        let key = mapping.key().unwrap_or_default();
        match field {
            CollectionField::Id => id = convert(key, value)?,
            CollectionField::Name => name = convert(key, value)?,
            CollectionField::CreateTime => create_time = Timestamp::from_secs(convert(key, value)?),
            CollectionField::Schema => {
                schema = convert::<Vec<Value>>(key, value)?
                    .into_iter()
                    .map(|item| field_from_value(key, item))
                    .collect::<Result<_, _>>()?
            }
            CollectionField::SegmentIds => segment_ids = convert(key, value)?,
            CollectionField::PartitionTags => partition_tags = convert(key, value)?,
            CollectionField::CachedEncoding => cached_encoding = convert(key, value)?,
        }
    }

    let collection = Collection::restore(
        id,
        name,
        create_time,
        schema,
        segment_ids,
        partition_tags,
        cached_encoding,
    );
    tracing::debug!(
        collection_id = collection.id(),
        fields = collection.schema().len(),
        "decoded collection document"
    );
    Ok(collection)
}

fn field_from_value(key: &str, value: Value) -> Result<FieldMeta, DecodingError> {
    let mut object = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(FieldMeta::default()),
        other => {
            return Err(DecodingError::invalid(
                key,
                format!("expected object, found {}", kind(&other)),
            ))
        }
    };
    let mut field = FieldMeta::default();
    for (schema_field, mapping) in DOCUMENT.schema_fields() {
        let Some(value) = lookup(&mut object, mapping)? else {
            continue;
        };
        let field_key = mapping.key().unwrap_or_default();
        match schema_field {
            SchemaField::FieldName => field.field_name = convert(field_key, value)?,
            SchemaField::DataType => field.data_type = convert::<DataType>(field_key, value)?,
            SchemaField::Dimension => field.dimension = convert(field_key, value)?,
        }
    }
    Ok(field)
}

/// Pull the value for a mapping out of an object; `None` when absent or null
fn lookup(object: &mut Map<String, Value>, mapping: Mapping) -> Result<Option<Value>, DecodingError> {
    let value = match mapping {
        Mapping::Key(key) => object.remove(key),
        Mapping::Nested { key, inner } => match object.remove(key) {
            Some(Value::Object(mut nested)) => nested.remove(inner),
            None | Some(Value::Null) => None,
            Some(other) => {
                return Err(DecodingError::invalid(
                    key,
                    format!("expected object, found {}", kind(&other)),
                ))
            }
        },
        Mapping::Omit => None,
    };
    Ok(value.filter(|v| !v.is_null()))
}

fn convert<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, DecodingError> {
    serde_json::from_value(value).map_err(|e| DecodingError::invalid(key, e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
