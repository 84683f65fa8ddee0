//! Information providers for the service report.
//!
//! This module handles:
//! - Static service metadata
//! - Live host facts (host name, OS, architecture, toolchain)
//! - Per-request facts (peer address, user agent, method, path)
//! - Uptime and timestamp formatting

pub mod request;
pub mod service;
pub mod system;
pub mod uptime;

pub use request::RequestInfo;
pub use service::ServiceInfo;
pub use system::SystemInfo;
pub use uptime::{isoformat, zulu, Uptime};
