//! Common test utilities

use axum::{middleware, Router};
use points_ledger::api;

/// Build a test application with a fresh, empty account.
///
/// Mirrors the router wiring in `main.rs` minus the tracing layer, so tests
/// exercise the same routes and middleware the server runs.
pub fn test_app() -> Router {
    let account = api::shared_account();
    api::create_router()
        .layer(middleware::from_fn(api::middleware::logging_middleware))
        .with_state(account)
}
