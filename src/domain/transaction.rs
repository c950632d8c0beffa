//! Transaction types
//!
//! Domain value types for point movements. A `PayerAmount` is a net point
//! movement attributed to a payer; a `Transaction` is a dated `PayerAmount`
//! as submitted through the `add` operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point movement attributed to a single payer.
///
/// `points` may be negative: spend allocations are reported as negative
/// entries, and adjustment transactions are submitted with negative points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerAmount {
    pub payer: String,
    pub points: i64,
}

impl PayerAmount {
    pub fn new(payer: impl Into<String>, points: i64) -> Self {
        Self {
            payer: payer.into(),
            points,
        }
    }
}

/// A dated point movement.
///
/// Transactions are ordered by `timestamp` when points are spent; the store
/// breaks timestamp ties by insertion order so results stay deterministic.
/// Timestamps are ISO-8601 on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub payer: String,
    pub points: i64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(payer: impl Into<String>, points: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            payer: payer.into(),
            points,
            timestamp,
        }
    }
}
