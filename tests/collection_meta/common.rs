//! Shared helpers and proptest strategies

use collection_meta::{Collection, DataType, FieldSchema, Timestamp};
use proptest::prelude::*;
use std::sync::Once;

static INIT: Once = Once::new();

/// Route codec logging to the test writer
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// The collection used throughout the end-to-end scenarios
pub fn scenario_collection() -> Collection {
    Collection::new(
        1,
        "c0",
        Timestamp::from_secs(1_700_000_000),
        &[FieldSchema::new("vec", DataType::VECTOR_FLOAT)],
        &[100, 101],
        &["p0"],
    )
}

/// Exact structured encoding of [`scenario_collection`]
pub const SCENARIO_STRUCTURED: &str = "id: 1
schema: {
  fields: [
    {
      name: \"vec\"
      dataType: VECTOR_FLOAT
    }
  ]
}
createTime: 1700000000
segmentIds: [100, 101]
partitionTags: [\"p0\"]
";

pub fn supported_data_type() -> impl Strategy<Value = DataType> {
    proptest::sample::select(DataType::ALL.to_vec())
}

pub fn field_schema() -> impl Strategy<Value = FieldSchema> {
    ("[a-z_][a-z0-9_]{0,12}", supported_data_type())
        .prop_map(|(name, data_type)| FieldSchema::new(name, data_type))
}

/// Arbitrary collections with supported type tags; names and tags may hold
/// any text, control characters included
pub fn collection() -> impl Strategy<Value = Collection> {
    (
        any::<u64>(),
        any::<String>(),
        0u64..4_000_000_000,
        prop::collection::vec(field_schema(), 0..6),
        prop::collection::vec(any::<u64>(), 0..8),
        prop::collection::vec(any::<String>(), 0..4),
    )
        .prop_map(|(id, name, secs, schema, segments, tags)| {
            Collection::new(
                id,
                name,
                Timestamp::from_secs(secs),
                &schema,
                &segments,
                &tags[..],
            )
        })
}

/// Like [`collection`], with per-field dimensions set
pub fn collection_with_dimensions() -> impl Strategy<Value = Collection> {
    (collection(), prop::collection::vec(-1i64..40_000, 6)).prop_map(|(mut c, dims)| {
        let names: Vec<String> = c.schema().iter().map(|f| f.field_name.clone()).collect();
        for (name, dim) in names.iter().zip(dims) {
            c.set_dimension(name, dim);
        }
        c
    })
}
