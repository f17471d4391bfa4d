//! HTTP listener settings: bind address, deployment environment, log
//! filter, request timeout and CORS origins.

use serde::Deserialize;
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::time::Duration;

use super::error::ValidationError;

/// Accepted values for `request_timeout_secs`.
const REQUEST_TIMEOUT_SECS: RangeInclusive<u64> = 1..=300;

/// `[server]` section. Every field is optional in the sources.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated allow-list. Unset means any origin.
    pub cors_origins: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::default(),
            log_level: "info,career_compass=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Parses `host:port`. Hostnames are not resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ValidationError::InvalidAddress(raw))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Trimmed origins, blanks dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = &self.cors_origins else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !REQUEST_TIMEOUT_SECS.contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(edit: impl FnOnce(&mut ServerConfig)) -> ServerConfig {
        let mut config = ServerConfig::default();
        edit(&mut config);
        config
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: ServerConfig =
            serde_json::from_value(serde_json::json!({"port": 3000, "environment": "production"}))
                .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.is_production());
    }

    #[test]
    fn hostnames_are_not_valid_bind_addresses() {
        let config = with(|c| c.host = "not a host".to_string());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidAddress(raw)) if raw == "not a host:8080"
        ));
    }

    #[test]
    fn cors_list_skips_blank_entries() {
        let config = with(|c| {
            c.cors_origins = Some("http://localhost:5173, http://localhost:3000,".to_string())
        });
        assert_eq!(
            config.cors_origins_list(),
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert!(ServerConfig::default().cors_origins_list().is_empty());
    }

    #[test]
    fn port_zero_is_rejected() {
        assert_eq!(with(|c| c.port = 0).validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn timeout_must_be_within_five_minutes() {
        for secs in [0, 301] {
            let config = with(|c| c.request_timeout_secs = secs);
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout), "{secs}");
        }
        assert!(with(|c| c.request_timeout_secs = 300).validate().is_ok());
    }
}
