//! Distinct collections encode independently across threads

use crate::common::init_tracing;
use collection_meta::{
    codec_for_id, from_text_document, to_structured_encoding, to_text_document, Collection,
    CollectionCodec, DataType, FieldSchema, Timestamp,
};
use std::sync::Arc;
use std::thread;

fn numbered(i: u64) -> Collection {
    Collection::new(
        i,
        format!("c{}", i),
        Timestamp::from_secs(1_700_000_000 + i),
        &[
            FieldSchema::new("id", DataType::INT64),
            FieldSchema::new("vec", DataType::VECTOR_FLOAT),
        ],
        &[i * 10, i * 10 + 1],
        &[format!("p{}", i)],
    )
}

#[test]
fn test_parallel_structured_encoding() {
    init_tracing();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let mut c = numbered(i);
                let text = to_structured_encoding(&mut c).unwrap();
                (c, text)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (c, text) = handle.join().unwrap();
        assert_eq!(c.id(), i as u64);
        assert_eq!(c.cached_encoding(), Some(text.as_str()));
        assert!(text.starts_with(&format!("id: {}\n", i)));
    }
}

#[test]
fn test_shared_codec_across_threads() {
    let codec: Arc<dyn CollectionCodec> = Arc::from(codec_for_id("document").unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let c = numbered(i);
                let text = codec.encode(&c).unwrap();
                assert_eq!(codec.decode(&text).unwrap(), c);
                text
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let text = handle.join().unwrap();
        assert_eq!(from_text_document(&text).unwrap(), numbered(i as u64));
        assert_eq!(text, to_text_document(&numbered(i as u64)).unwrap());
    }
}
