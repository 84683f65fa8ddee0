//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Bind address (`HOST`). Host names are resolved when binding.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServiceError::InvalidConfig("HOST must not be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ServiceError::InvalidConfig("PORT must be between 1 and 65535".to_string()));
        }

        Ok(())
    }

    /// Address string handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn reads_host_and_port() {
        let config = Config::from_vars(vars(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let config = Config::from_vars(vars(&[("PATH", "/usr/bin"), ("RUST_LOG", "debug")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn non_integer_port_is_rejected() {
        let err = Config::from_vars(vars(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(Config::from_vars(vars(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn validate_rejects_empty_host() {
        let config = Config {
            host: "  ".to_string(),
            port: 5000,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_port_zero() {
        let config = Config {
            host: "localhost".to_string(),
            port: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
