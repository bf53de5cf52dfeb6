//! The collection aggregate
//!
//! A [`Collection`] carries a data collection's identity (id, name, creation
//! time), its ordered schema, and references to the segments and partitions
//! that physically hold its data.
//!
//! ## Lifecycle
//!
//! - Created once through [`Collection::new`]
//! - Segment and partition lists grow in place for the rest of its life
//! - `id`, `name` and `create_time` never change after construction
//!
//! ## Encoding Cache
//!
//! The collection can hold the most recent structured encoding of itself.
//! The cache is derived and non-authoritative. Encoders never touch it;
//! callers store a fresh encoding with [`Collection::update_cache`].

use crate::error::{Result, ValidationError};
use crate::field::{FieldMeta, FieldSchema};
use crate::limits::Limits;
use crate::timestamp::Timestamp;
use crate::validation;
use std::collections::HashSet;

/// Collection metadata
///
/// `Default` yields the empty collection: every number zero, every string
/// and sequence empty, no cached encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    id: u64,
    name: String,
    create_time: Timestamp,
    schema: Vec<FieldMeta>,
    segment_ids: Vec<u64>,
    partition_tags: Vec<String>,
    cached_encoding: Option<String>,
}

impl Collection {
    /// Create a collection
    ///
    /// Every schema entry becomes a [`FieldMeta`] with the default dimension,
    /// in input order. Segment ids and partition tags are copied into owned
    /// sequences. `create_time` is truncated to whole seconds.
    ///
    /// Nothing is validated here; see [`Collection::validate`].
    pub fn new<S: AsRef<str>>(
        id: u64,
        name: impl Into<String>,
        create_time: impl Into<Timestamp>,
        schema: &[FieldSchema],
        segment_ids: &[u64],
        partition_tags: &[S],
    ) -> Self {
        Collection {
            id,
            name: name.into(),
            create_time: create_time.into(),
            schema: schema.iter().map(FieldMeta::from).collect(),
            segment_ids: segment_ids.to_vec(),
            partition_tags: partition_tags
                .iter()
                .map(|t| t.as_ref().to_string())
                .collect(),
            cached_encoding: None,
        }
    }

    /// Rebuild a collection from already-decoded parts
    ///
    /// Unlike [`Collection::new`], field dimensions are taken as given. An
    /// empty `cached_encoding` is stored as no cache.
    pub fn restore(
        id: u64,
        name: String,
        create_time: Timestamp,
        schema: Vec<FieldMeta>,
        segment_ids: Vec<u64>,
        partition_tags: Vec<String>,
        cached_encoding: String,
    ) -> Self {
        Collection {
            id,
            name,
            create_time,
            schema,
            segment_ids,
            partition_tags,
            cached_encoding: Some(cached_encoding).filter(|s| !s.is_empty()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Unique numeric identifier
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Human-readable name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation time (seconds)
    #[inline]
    pub fn create_time(&self) -> Timestamp {
        self.create_time
    }

    /// Schema fields in declaration order
    #[inline]
    pub fn schema(&self) -> &[FieldMeta] {
        &self.schema
    }

    /// Associated segment ids, in insertion order
    #[inline]
    pub fn segment_ids(&self) -> &[u64] {
        &self.segment_ids
    }

    /// Associated partition tags, in insertion order
    #[inline]
    pub fn partition_tags(&self) -> &[String] {
        &self.partition_tags
    }

    /// The most recently cached structured encoding, if any
    #[inline]
    pub fn cached_encoding(&self) -> Option<&str> {
        self.cached_encoding.as_deref()
    }

    /// First schema field with the given name
    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.schema.iter().find(|f| f.field_name == name)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Override the dimension of the first field with the given name
    ///
    /// Returns `false` if no such field exists.
    pub fn set_dimension(&mut self, field_name: &str, dimension: i64) -> bool {
        match self.schema.iter_mut().find(|f| f.field_name == field_name) {
            Some(field) => {
                field.dimension = dimension;
                true
            }
            None => false,
        }
    }

    /// Append a segment id
    pub fn add_segment(&mut self, segment_id: u64) {
        self.segment_ids.push(segment_id);
    }

    /// Append a partition tag
    pub fn add_partition_tag(&mut self, tag: impl Into<String>) {
        self.partition_tags.push(tag.into());
    }

    /// Drop the cached encoding
    pub fn clear_cache(&mut self) {
        self.cached_encoding = None;
    }

    /// Replace the cached encoding
    ///
    /// An empty string clears the cache.
    pub fn update_cache(&mut self, encoded: impl Into<String>) {
        let encoded = encoded.into();
        self.cached_encoding = if encoded.is_empty() {
            None
        } else {
            Some(encoded)
        };
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check names, field uniqueness, partition tags and vector dimensions
    ///
    /// Checks run in the order: collection name, each field in schema order
    /// (name, uniqueness, dimension), each partition tag (strict). The first
    /// violation is returned.
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        validation::validate_collection_name(&self.name, limits)?;

        let mut seen = HashSet::with_capacity(self.schema.len());
        for field in &self.schema {
            validation::validate_field_name(&field.field_name, limits)?;
            if !seen.insert(field.field_name.as_str()) {
                return Err(ValidationError::DuplicateField {
                    name: field.field_name.clone(),
                });
            }
            validation::validate_dimension(field, limits)?;
        }

        for tag in &self.partition_tags {
            validation::validate_partition_tag(tag, true, limits)?;
        }
        Ok(())
    }
}
