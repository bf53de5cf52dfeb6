//! Validation limits
//!
//! Bounds enforced by the opt-in validation pass. Construction and the codecs
//! never consult these; a collection that exceeds them is still encodable.

/// Validation limits for names and dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of collection names, field names and partition tags, in bytes (default: 255)
    pub max_name_length: usize,

    /// Maximum vector dimension (default: 32768)
    pub max_dimension: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_name_length: 255,
            max_dimension: 32768,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_name_length: 16,
            max_dimension: 64,
        }
    }
}
