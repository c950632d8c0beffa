//! Domain module
//!
//! Core domain types shared by the ledger and the API layer.

pub mod error;
pub mod transaction;

pub use error::LedgerError;
pub use transaction::{PayerAmount, Transaction};
