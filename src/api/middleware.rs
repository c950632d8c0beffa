//! API Middleware
//!
//! Request logging middleware.

use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Correlation ID attached to each request for log correlation.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationId(pub Uuid);

/// Extract the caller-supplied correlation ID, if any.
fn correlation_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get("X-Correlation-Id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Request logging middleware
pub async fn logging_middleware(mut request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    // Honor a caller-supplied correlation ID or generate a new one
    let correlation_id =
        correlation_id_from_headers(request.headers()).unwrap_or_else(Uuid::new_v4);
    request.extensions_mut().insert(CorrelationId(correlation_id));

    let start = std::time::Instant::now();

    // Log request
    tracing::info!(
        method = %method,
        uri = %uri,
        correlation_id = %correlation_id,
        "Incoming request"
    );

    // Process request
    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    // Log response
    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        correlation_id = %correlation_id,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_id_from_headers() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert("x-correlation-id", id.to_string().parse().unwrap());

        assert_eq!(correlation_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_invalid_correlation_id_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-correlation-id", "not-a-uuid".parse().unwrap());

        assert_eq!(correlation_id_from_headers(&headers), None);
    }

    #[test]
    fn test_missing_correlation_id() {
        let headers = HeaderMap::new();
        assert_eq!(correlation_id_from_headers(&headers), None);
    }
}
