//! HTTP API module for the service information and health endpoints.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ErrorResponse};
pub use handlers::{AppState, EndpointInfo, HealthResponse, IndexResponse, ENDPOINTS};
pub use routes::{create_router, serve};
