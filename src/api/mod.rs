//! API module
//!
//! HTTP API endpoints and middleware.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ledger::UserAccount;

pub mod middleware;
pub mod routes;

pub use routes::create_router;

/// Shared application state: the single account served by this process.
///
/// `add` and `spend` must be mutually exclusive critical sections, so every
/// handler holds this lock for the duration of its ledger call.
pub type SharedAccount = Arc<Mutex<UserAccount>>;

/// Create a fresh account behind its lock (one per server process or test).
pub fn shared_account() -> SharedAccount {
    Arc::new(Mutex::new(UserAccount::new()))
}
