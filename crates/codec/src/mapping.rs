//! Field-mapping tables
//!
//! Each encoding declares, for every model field, whether it is carried and
//! under which key. Encoders walk a table in order to emit keys; decoders
//! use the same table to resolve incoming keys. A model field missing from a
//! table is caught by the coverage tests below, so a new field cannot slip
//! into one encoding and silently miss the other.
//!
//! | model field | structured | text document |
//! |-------------|------------|---------------|
//! | id | `id` | `id` |
//! | name | omitted | `name` |
//! | create_time | `createTime` | `creat_time` |
//! | schema | `schema { fields }` | `schema` |
//! | segment_ids | `segmentIds` | `segment_ids` |
//! | partition_tags | `partitionTags` | `partition_tags` |
//! | cached_encoding | omitted | `grpc_marshal_string` |
//! | field_name | `name` | `field_name` |
//! | data_type | `dataType` | `type` |
//! | dimension | omitted | `dimension` |

/// Fields of the collection model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionField {
    /// Numeric id
    Id,
    /// Human-readable name
    Name,
    /// Creation time in seconds
    CreateTime,
    /// Ordered schema fields
    Schema,
    /// Segment ids
    SegmentIds,
    /// Partition tags
    PartitionTags,
    /// Cached structured encoding
    CachedEncoding,
}

impl CollectionField {
    /// Every collection field
    pub const ALL: [CollectionField; 7] = [
        CollectionField::Id,
        CollectionField::Name,
        CollectionField::CreateTime,
        CollectionField::Schema,
        CollectionField::SegmentIds,
        CollectionField::PartitionTags,
        CollectionField::CachedEncoding,
    ];
}

/// Fields of one schema entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaField {
    /// Field name
    FieldName,
    /// Type tag
    DataType,
    /// Vector dimension
    Dimension,
}

impl SchemaField {
    /// Every schema-entry field
    pub const ALL: [SchemaField; 3] = [
        SchemaField::FieldName,
        SchemaField::DataType,
        SchemaField::Dimension,
    ];
}

/// How a model field appears in an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// Carried under this key
    Key(&'static str),
    /// Carried under `inner`, wrapped in a sub-message at `key`
    Nested {
        /// Outer key
        key: &'static str,
        /// Key inside the sub-message
        inner: &'static str,
    },
    /// Not carried
    Omit,
}

impl Mapping {
    /// The key at the enclosing level, if the field is carried
    pub const fn key(&self) -> Option<&'static str> {
        match self {
            Mapping::Key(key) | Mapping::Nested { key, .. } => Some(*key),
            Mapping::Omit => None,
        }
    }
}

/// Mapping table for one encoding
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    /// Collection-level mappings, in emission order
    pub collection: &'static [(CollectionField, Mapping)],
    /// Schema-entry mappings, in emission order
    pub field: &'static [(SchemaField, Mapping)],
}

impl FieldMap {
    /// Carried collection fields, in emission order
    pub fn collection_fields(&self) -> impl Iterator<Item = (CollectionField, Mapping)> + '_ {
        self.collection
            .iter()
            .copied()
            .filter(|(_, m)| *m != Mapping::Omit)
    }

    /// Carried schema-entry fields, in emission order
    pub fn schema_fields(&self) -> impl Iterator<Item = (SchemaField, Mapping)> + '_ {
        self.field.iter().copied().filter(|(_, m)| *m != Mapping::Omit)
    }

    /// Mapping of a collection field
    pub fn mapping(&self, field: CollectionField) -> Mapping {
        self.collection
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| *m)
            .unwrap_or(Mapping::Omit)
    }

    /// Resolve an incoming collection-level key
    pub fn collection_field_for_key(&self, key: &str) -> Option<(CollectionField, Mapping)> {
        self.collection_fields().find(|(_, m)| m.key() == Some(key))
    }

    /// Resolve an incoming schema-entry key
    pub fn schema_field_for_key(&self, key: &str) -> Option<SchemaField> {
        self.schema_fields()
            .find(|(_, m)| m.key() == Some(key))
            .map(|(f, _)| f)
    }
}

/// Structured metadata encoding
pub const STRUCTURED: FieldMap = FieldMap {
    collection: &[
        (CollectionField::Id, Mapping::Key("id")),
        (CollectionField::Name, Mapping::Omit),
        (
            CollectionField::Schema,
            Mapping::Nested {
                key: "schema",
                inner: "fields",
            },
        ),
        (CollectionField::CreateTime, Mapping::Key("createTime")),
        (CollectionField::SegmentIds, Mapping::Key("segmentIds")),
        (CollectionField::PartitionTags, Mapping::Key("partitionTags")),
        (CollectionField::CachedEncoding, Mapping::Omit),
    ],
    field: &[
        (SchemaField::FieldName, Mapping::Key("name")),
        (SchemaField::DataType, Mapping::Key("dataType")),
        (SchemaField::Dimension, Mapping::Omit),
    ],
};

/// Text document encoding
pub const DOCUMENT: FieldMap = FieldMap {
    collection: &[
        (CollectionField::Id, Mapping::Key("id")),
        (CollectionField::Name, Mapping::Key("name")),
        (CollectionField::CreateTime, Mapping::Key("creat_time")),
        (CollectionField::Schema, Mapping::Key("schema")),
        (CollectionField::SegmentIds, Mapping::Key("segment_ids")),
        (CollectionField::PartitionTags, Mapping::Key("partition_tags")),
        (CollectionField::CachedEncoding, Mapping::Key("grpc_marshal_string")),
    ],
    field: &[
        (SchemaField::FieldName, Mapping::Key("field_name")),
        (SchemaField::DataType, Mapping::Key("type")),
        (SchemaField::Dimension, Mapping::Key("dimension")),
    ],
};
