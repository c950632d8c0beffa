//! points-ledger Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;

pub use config::Config;
pub use domain::{LedgerError, PayerAmount, Transaction};
pub use error::{AppError, AppResult};
pub use ledger::UserAccount;
