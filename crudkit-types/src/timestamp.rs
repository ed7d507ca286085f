//! Millisecond-precision wall-clock timestamps for record metadata.
//!
//! Timestamps order record lifecycles: creation time is fixed once,
//! modification time strictly increases on every update. [`Timestamp::next_after`]
//! provides the strict-increase guarantee even when the wall clock has not
//! advanced between two updates.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wall-clock timestamp in milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp at the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Captures a fresh "now" guaranteed strictly greater than `self`.
    ///
    /// When the wall clock has not advanced past `self` (same-millisecond
    /// updates, or a clock that stepped backwards), returns `self + 1ms`.
    #[must_use]
    pub fn next_after(&self) -> Self {
        let now = Self::now();
        if now > *self {
            now
        } else {
            Self(self.0.saturating_add(1))
        }
    }

    /// Converts to a chrono UTC datetime, if representable.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}
