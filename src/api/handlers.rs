//! HTTP API handlers.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, Method, Uri},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::ApiError;
use crate::info::{isoformat, RequestInfo, ServiceInfo, SystemInfo, Uptime};

/// Application state shared with handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// When the service started serving.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new app state, capturing the start timestamp now.
    pub fn new() -> Self {
        Self::with_start(Utc::now())
    }

    /// Create app state with an explicit start timestamp.
    pub fn with_start(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry in the endpoint catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// Routes served by this process, in catalog order.
pub const ENDPOINTS: [EndpointInfo; 2] = [
    EndpointInfo {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    EndpointInfo {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
];

/// Service information response.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub request: RequestInfo,
    pub runtime: Uptime,
    pub endpoints: &'static [EndpointInfo],
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Current time, ISO-8601 with `+00:00` offset.
    pub timestamp: String,
    pub uptime_seconds: u64,
}

/// Service information handler - aggregates service, host, request and uptime facts.
pub async fn index(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<IndexResponse>, ApiError> {
    let system = SystemInfo::collect()?;
    let request = RequestInfo::from_parts(peer.map(|ConnectInfo(addr)| addr), &method, &uri, &headers);

    Ok(Json(IndexResponse {
        service: ServiceInfo::current(),
        system,
        request,
        runtime: Uptime::since(state.started_at),
        endpoints: &ENDPOINTS,
    }))
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();

    Json(HealthResponse {
        status: "healthy",
        timestamp: isoformat(now),
        uptime_seconds: Uptime::between(state.started_at, now).seconds,
    })
}
