//! Opt-in validation of names and dimensions

use collection_meta::model::NameKind;
use collection_meta::{Collection, DataType, FieldSchema, Limits, Timestamp, ValidationError};

fn collection(name: &str, fields: &[FieldSchema], tags: &[&str]) -> Collection {
    Collection::new(1, name, Timestamp::EPOCH, fields, &[], tags)
}

#[test]
fn test_valid_collection_passes() {
    let mut c = collection(
        "images_v2",
        &[
            FieldSchema::new("id", DataType::INT64),
            FieldSchema::new("embedding", DataType::VECTOR_FLOAT),
            FieldSchema::new("hash", DataType::VECTOR_BINARY),
        ],
        &["_default", "2024_q1"],
    );
    c.set_dimension("embedding", 768);
    c.set_dimension("hash", 512);
    c.validate(&Limits::default()).unwrap();
}

#[test]
fn test_construction_never_validates() {
    let c = collection("9 bad name", &[FieldSchema::new("a-b", DataType::BOOL)], &["$"]);
    assert_eq!(c.name(), "9 bad name");
    assert!(c.validate(&Limits::default()).is_err());
}

#[test]
fn test_collection_name_errors() {
    let limits = Limits::default();
    assert_eq!(
        collection("", &[], &[]).validate(&limits).unwrap_err(),
        ValidationError::EmptyName {
            kind: NameKind::Collection
        }
    );
    assert!(matches!(
        collection("1abc", &[], &[]).validate(&limits),
        Err(ValidationError::InvalidStart { char: '1', .. })
    ));
    assert!(matches!(
        collection("ab-c", &[], &[]).validate(&limits),
        Err(ValidationError::InvalidChar { char: '-', .. })
    ));
    let long = "a".repeat(256);
    assert!(matches!(
        collection(&long, &[], &[]).validate(&limits),
        Err(ValidationError::NameTooLong { length: 256, max: 255, .. })
    ));
}

#[test]
fn test_duplicate_field_names() {
    let c = collection(
        "c",
        &[
            FieldSchema::new("a", DataType::INT32),
            FieldSchema::new("a", DataType::FLOAT),
        ],
        &[],
    );
    assert_eq!(
        c.validate(&Limits::default()).unwrap_err(),
        ValidationError::DuplicateField {
            name: "a".to_string()
        }
    );
}

#[test]
fn test_dimension_bounds() {
    let limits = Limits::with_small_limits();
    let mut c = collection("c", &[FieldSchema::new("v", DataType::VECTOR_FLOAT)], &[]);

    c.set_dimension("v", 0);
    assert!(matches!(
        c.validate(&limits),
        Err(ValidationError::InvalidDimension { dimension: 0, .. })
    ));

    c.set_dimension("v", limits.max_dimension + 1);
    assert!(matches!(
        c.validate(&limits),
        Err(ValidationError::InvalidDimension { .. })
    ));

    c.set_dimension("v", limits.max_dimension);
    c.validate(&limits).unwrap();
}

#[test]
fn test_binary_dimension_alignment() {
    let mut c = collection("c", &[FieldSchema::new("b", DataType::VECTOR_BINARY)], &[]);
    c.set_dimension("b", 12);
    assert_eq!(
        c.validate(&Limits::default()).unwrap_err(),
        ValidationError::UnalignedBinaryDimension {
            field: "b".to_string(),
            dimension: 12
        }
    );
}

#[test]
fn test_scalar_dimension_ignored() {
    let mut c = collection("c", &[FieldSchema::new("n", DataType::DOUBLE)], &[]);
    c.set_dimension("n", -5);
    c.validate(&Limits::default()).unwrap();
}

#[test]
fn test_partition_tag_errors() {
    let limits = Limits::default();
    assert!(matches!(
        collection("c", &[], &["  "]).validate(&limits),
        Err(ValidationError::EmptyName {
            kind: NameKind::PartitionTag
        })
    ));
    assert!(matches!(
        collection("c", &[], &["tag with space"]).validate(&limits),
        Err(ValidationError::InvalidChar { .. })
    ));
}
