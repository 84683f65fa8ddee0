//! DevOps info service.
//!
//! A small HTTP service exposing two read-only endpoints:
//!
//! ```text
//! GET /        service metadata, host facts, request facts, uptime, endpoint catalog
//! GET /health  liveness: status, timestamp, uptime in seconds
//! ```
//!
//! Every other path/method answers with a JSON 404 body; any internal fault
//! answers with a JSON 500 body that carries no internal detail.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`info`]: Service, system, request and uptime providers
//! - [`api`]: HTTP handlers, error responses and router
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod info;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
