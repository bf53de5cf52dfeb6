//! Second-precision creation timestamp
//!
//! A collection records when it was created as whole seconds since the Unix
//! epoch (1970-01-01 00:00:00 UTC). Sub-second precision is dropped at
//! construction and never recovered.
//!
//! ## Usage
//!
//! ```
//! use collection_meta_core::Timestamp;
//!
//! let now = Timestamp::now();
//! let fixed = Timestamp::from_secs(1_600_000_000);
//! assert!(now > fixed);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since Unix epoch
///
/// ## Invariants
///
/// - Always non-negative; instants before the epoch clamp to `EPOCH`
/// - Serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Read the wall clock, truncated to whole seconds
    ///
    /// Returns epoch if the system clock is before the Unix epoch.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    /// Create a timestamp from seconds since epoch
    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        Timestamp(secs)
    }

    /// Seconds since Unix epoch
    #[inline]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Convert back to a UTC date-time
    ///
    /// Returns `None` when the value is beyond chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.0).ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// From Implementations
// ============================================================================

impl From<u64> for Timestamp {
    /// Create from raw seconds
    fn from(secs: u64) -> Self {
        Timestamp::from_secs(secs)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp(u64::try_from(dt.timestamp()).unwrap_or(0))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        let duration = t.duration_since(UNIX_EPOCH).unwrap_or_default();
        Timestamp(duration.as_secs())
    }
}

// ============================================================================
// Tests
// ============================================================================
