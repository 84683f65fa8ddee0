//! HTTP API route definitions.

use std::future::Future;
use std::net::SocketAddr;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::error::{handle_panic, not_found};
use super::handlers::{health, index, AppState};
use crate::metrics::track_requests;

/// Create the API router.
///
/// Unknown paths and unsupported methods on known paths both answer 404.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .fallback(not_found);

    with_middleware(routes).with_state(state)
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// Peer addresses are recorded so handlers can report the client IP.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

/// Panic recovery innermost so metrics and traces see the 500.
fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
}
