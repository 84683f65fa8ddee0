//! Host system facts, queried live on every call.

use serde::Serialize;

use crate::error::{Result, ServiceError};

/// Compiler version the binary was built with, captured by the build script.
pub const RUST_VERSION: &str = env!("DEVOPS_INFO_RUSTC_VERSION");

/// Host facts reported by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub architecture: String,
    pub rust_version: String,
}

impl SystemInfo {
    /// Query the execution environment. Any failed query fails the whole report.
    pub fn collect() -> Result<Self> {
        Ok(Self {
            hostname: current_hostname()?,
            platform: platform_name(std::env::consts::OS).to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            rust_version: RUST_VERSION.to_string(),
        })
    }
}

fn current_hostname() -> Result<String> {
    hostname::get()
        .map_err(ServiceError::Hostname)?
        .into_string()
        .map_err(|raw| ServiceError::HostnameEncoding(raw.to_string_lossy().into_owned()))
}

/// OS family name as operators usually write it.
pub fn platform_name(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}
