//! Static service metadata.

use serde::Serialize;

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "devops-info-service";
/// Service version reported by `GET /`.
pub const SERVICE_VERSION: &str = "1.0.0";
/// Human description reported by `GET /`.
pub const SERVICE_DESCRIPTION: &str = "DevOps course info service";
/// HTTP framework serving the endpoints.
pub const SERVICE_FRAMEWORK: &str = "axum";

/// Fixed service metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

impl ServiceInfo {
    /// The service's own metadata.
    pub fn current() -> Self {
        Self {
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            description: SERVICE_DESCRIPTION,
            framework: SERVICE_FRAMEWORK,
        }
    }
}
