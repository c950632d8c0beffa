//! Domain Error Types
//!
//! Pure ledger errors that don't depend on the web layer.

use thiserror::Error;

/// Errors raised by the ledger core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Requested points exceed what is available. Raised when a negative
    /// adjustment would drive a payer's balance below zero, and when a spend
    /// asks for more than the total balance. Recoverable: the ledger is left
    /// usable and the caller may retry with different input.
    #[error("Insufficient points: requested {requested}, available {available}")]
    InsufficientPoints { requested: i64, available: i64 },

    /// The transaction store was drained while spend logic believed points
    /// remained. Not reachable through the public operations; indicates an
    /// internal consistency fault.
    #[error("Transaction store is empty")]
    EmptyStore,
}

impl LedgerError {
    /// Create an insufficient points error
    pub fn insufficient_points(requested: i64, available: i64) -> Self {
        Self::InsufficientPoints {
            requested,
            available,
        }
    }

    /// Check if this is a client error (caller's fault, safe to retry)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }
}
