//! Request metrics for the HTTP surface.
//!
//! Recorded through the `metrics` facade; they are no-ops until the
//! embedding process installs a recorder.

use std::time::Instant;

use axum::{extract::MatchedPath, extract::Request, middleware::Next, response::Response};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Route label for requests no handler matched.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, route: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "route" => route.to_string()).record(latency_ms);
}

/// Increment the request counter.
pub fn inc_http_requests(route: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Route template the request matched, or `unmatched`.
pub fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

/// Middleware recording count and latency per matched route.
///
/// Labels use the route template rather than the raw path so unknown paths
/// collapse into a single `unmatched` series.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = route_label(&request);

    debug!(method = %request.method(), path = %request.uri().path(), "Handling request");

    let response = next.run(request).await;

    inc_http_requests(&route, response.status().as_u16());
    record_http_latency(start, &route);

    response
}
