//! Collection Metadata Integration Tests
//!
//! Exercises the model and both encodings through the public API:
//! - Document round trips and key order
//! - Structured encoding layout, determinism and decoding
//! - Cache semantics
//! - Validation
//! - Concurrent encoding of distinct collections

mod common;

mod concurrent_encoding;
mod structured_encoding;
mod validation;
