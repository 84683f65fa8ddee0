//! Per-request facts projected from the incoming request.

use std::net::SocketAddr;

use axum::http::{header::USER_AGENT, HeaderMap, Method, Uri};
use serde::Serialize;

/// Request facts reported by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
    /// Peer address without port; null when the transport does not report one.
    pub client_ip: Option<String>,
    /// `User-Agent` header as sent; null only when absent.
    pub user_agent: Option<String>,
    pub method: String,
    /// Path component exactly as received.
    pub path: String,
}

impl RequestInfo {
    /// Project the request into its reported facts.
    pub fn from_parts(
        peer: Option<SocketAddr>,
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
    ) -> Self {
        Self {
            client_ip: peer.map(|addr| addr.ip().to_string()),
            user_agent: headers
                .get(USER_AGENT)
                .map(|value| decode_header(value.as_bytes())),
            method: method.as_str().to_string(),
            path: uri.path().to_string(),
        }
    }
}

/// UTF-8 when the bytes allow it, otherwise latin-1 so no byte is dropped.
fn decode_header(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
