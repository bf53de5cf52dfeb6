//! Structured metadata encoding

use crate::common::*;
use collection_meta::{
    decode_structured, encode_structured, to_structured_encoding, Collection, CollectionCodec,
    CollectionMeta, DataType, DecodingError, EncodingError, FieldSchema, StructuredCodec,
    Timestamp, DEFAULT_DIMENSION,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_structured_is_deterministic(c in collection_with_dimensions()) {
        prop_assert_eq!(encode_structured(&c).unwrap(), encode_structured(&c).unwrap());
    }

    #[test]
    fn prop_structured_round_trip(c in collection()) {
        let meta = decode_structured(&encode_structured(&c).unwrap()).unwrap();
        prop_assert_eq!(&meta, &CollectionMeta::from_collection(&c));
        prop_assert_eq!(meta.into_collection(c.name()), c);
    }

    #[test]
    fn prop_dimensions_do_not_affect_structured(c in collection_with_dimensions()) {
        let baseline = Collection::new(
            c.id(),
            c.name(),
            c.create_time(),
            &CollectionMeta::from_collection(&c).schema.fields,
            c.segment_ids(),
            c.partition_tags(),
        );
        prop_assert_eq!(encode_structured(&c).unwrap(), encode_structured(&baseline).unwrap());
    }
}

#[test]
fn test_scenario_structured() {
    let c = scenario_collection();
    assert_eq!(encode_structured(&c).unwrap(), SCENARIO_STRUCTURED);
}

#[test]
fn test_empty_collection_structured() {
    let text = encode_structured(&Collection::default()).unwrap();
    assert_eq!(
        text,
        "id: 0\nschema: {\n  fields: []\n}\ncreateTime: 0\nsegmentIds: []\npartitionTags: []\n"
    );
    assert_eq!(decode_structured(&text).unwrap(), CollectionMeta::default());
}

#[test]
fn test_structured_excludes_name_dimension_and_cache() {
    let mut c = Collection::new(
        77,
        "secret_name",
        Timestamp::from_secs(1),
        &[FieldSchema::new("v", DataType::VECTOR_BINARY)],
        &[],
        &["p"],
    );
    c.set_dimension("v", 4096);
    c.update_cache("previous-encoding");

    let text = encode_structured(&c).unwrap();
    assert!(!text.contains("secret_name"));
    assert!(!text.contains("4096"));
    assert!(!text.contains("previous-encoding"));
    assert!(text.contains("dataType: VECTOR_BINARY"));
}

#[test]
fn test_every_supported_type_encodes_by_name() {
    let schema: Vec<FieldSchema> = DataType::ALL
        .iter()
        .enumerate()
        .map(|(i, &t)| FieldSchema::new(format!("f{}", i), t))
        .collect();
    let c = Collection::new::<&str>(1, "all", Timestamp::EPOCH, &schema, &[], &[]);
    let text = encode_structured(&c).unwrap();
    for t in DataType::ALL {
        let name = t.name().unwrap();
        assert!(text.contains(&format!("dataType: {}\n", name)), "{} missing", name);
    }

    let meta = decode_structured(&text).unwrap();
    assert_eq!(meta.schema.fields, schema);
}

#[test]
fn test_unsupported_type_fails_structured_only() {
    let c = Collection::new::<&str>(
        1,
        "odd",
        Timestamp::EPOCH,
        &[FieldSchema::new("x", DataType::from_code(55))],
        &[],
        &[],
    );
    assert_eq!(
        encode_structured(&c).unwrap_err(),
        EncodingError::UnsupportedDataType {
            field: "x".to_string(),
            code: 55,
        }
    );
    assert!(collection_meta::to_text_document(&c).is_ok());
}

#[test]
fn test_decoded_collection_gets_default_dimensions() {
    let meta = decode_structured(SCENARIO_STRUCTURED).unwrap();
    let c = meta.into_collection("c0");
    assert_eq!(c.field("vec").unwrap().dimension, DEFAULT_DIMENSION);
    assert_eq!(c, scenario_collection());
}

#[test]
fn test_codec_trait_matches_free_functions() {
    let mut c = scenario_collection();
    let codec = StructuredCodec;
    let via_trait = codec.encode(&c).unwrap();
    assert_eq!(via_trait, to_structured_encoding(&mut c).unwrap());

    let decoded = codec.decode(&via_trait).unwrap();
    assert_eq!(decoded.name(), "");
    assert_eq!(decoded.segment_ids(), c.segment_ids());
}

#[test]
fn test_control_characters_survive_both_encodings() {
    let tags = ["nul\u{0}", "del\u{7f}", "crlf\r\n\t", "sep\u{2028}", "bell\u{7}"];
    let c = Collection::new(5, "ctl\u{1}", Timestamp::from_secs(3), &[], &[], &tags);

    let text = encode_structured(&c).unwrap();
    assert!(text.contains("\"nul\\000\""));
    assert!(text.contains("\"del\\177\""));
    assert!(text.contains("\"crlf\\r\\n\\t\""));
    assert_eq!(text.lines().count(), 7);

    let meta = decode_structured(&text).unwrap();
    assert_eq!(meta.partition_tags, tags);
    assert_eq!(meta.into_collection("ctl\u{1}"), c);

    let document = collection_meta::to_text_document(&c).unwrap();
    assert_eq!(collection_meta::from_text_document(&document).unwrap(), c);
}

#[test]
fn test_truncated_structured_text() {
    let truncated = &SCENARIO_STRUCTURED[..SCENARIO_STRUCTURED.find("dataType").unwrap()];
    assert!(matches!(
        decode_structured(truncated),
        Err(DecodingError::Syntax { .. })
    ));
}

#[test]
fn test_structured_decode_accepts_hand_written_text() {
    let text = "# hand-edited\nid: 4, createTime: 12\nschema: { fields: [{ name: \"a\" dataType: 5 },] }\nsegmentIds: [3, 1,]\nextra: \"ignored\"\n";
    let meta = decode_structured(text).unwrap();
    assert_eq!(meta.id, 4);
    assert_eq!(meta.create_time, Timestamp::from_secs(12));
    assert_eq!(meta.schema.fields, vec![FieldSchema::new("a", DataType::INT64)]);
    assert_eq!(meta.segment_ids, vec![3, 1]);
    assert!(meta.partition_tags.is_empty());
}

#[test]
fn test_structured_decode_rejects_unknown_type_name() {
    let text = "schema: {\n  fields: [\n    {\n      name: \"a\"\n      dataType: VECTOR_HALF\n    }\n  ]\n}\n";
    assert_eq!(
        decode_structured(text).unwrap_err(),
        DecodingError::UnknownDataType("VECTOR_HALF".to_string())
    );
}
