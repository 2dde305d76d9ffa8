//! Environment-driven configuration.
//!
//! Loading never hard-fails on a missing collaborator endpoint; it records a
//! warning and falls back (in-memory persistence, disabled uploads) so a dev
//! instance starts with zero setup. Malformed values are errors.

use std::env;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub persistence: PersistenceConfig,
    pub metadata: ConfigMetadata,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            upload: UploadConfig { endpoint: None },
            persistence: PersistenceConfig { endpoint: None },
            metadata: ConfigMetadata::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Upload service endpoint; `None` disables uploads.
    pub endpoint: Option<Url>,
}

#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Remote profile API endpoint; `None` selects the in-memory store.
    pub endpoint: Option<Url>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub env_file_loaded: bool,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, message: impl Into<String>, hint: Option<&str>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: hint.map(str::to_string),
        });
    }
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("invalid {name}: {value:?} is not a valid port")]
    InvalidPort { name: &'static str, value: String },

    #[error("invalid {name}: {value:?} is not a valid URL")]
    InvalidUrl { name: &'static str, value: String },
}

#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = dotenvy::dotenv().is_ok();
        let mut warnings = ConfigWarnings::default();

        let host = non_empty_var("RIPPLE_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match non_empty_var("RIPPLE_PORT") {
            Some(raw) => parse_port("RIPPLE_PORT", &raw)?,
            None => 3000,
        };

        let upload_endpoint = match non_empty_var("RIPPLE_UPLOAD_URL") {
            Some(raw) => Some(parse_endpoint("RIPPLE_UPLOAD_URL", &raw)?),
            None => {
                warnings.push(
                    "no upload service configured; photo uploads will fail",
                    Some("set RIPPLE_UPLOAD_URL"),
                );
                None
            }
        };

        let persistence_endpoint = match non_empty_var("RIPPLE_PROFILE_API_URL") {
            Some(raw) => Some(parse_endpoint("RIPPLE_PROFILE_API_URL", &raw)?),
            None => {
                warnings.push(
                    "no profile API configured; using the in-memory store",
                    Some("set RIPPLE_PROFILE_API_URL"),
                );
                None
            }
        };

        Ok(ConfigLoad {
            config: Config {
                server: ServerConfig { host, port },
                upload: UploadConfig {
                    endpoint: upload_endpoint,
                },
                persistence: PersistenceConfig {
                    endpoint: persistence_endpoint,
                },
                metadata: ConfigMetadata { env_file_loaded },
            },
            warnings,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_port(name: &'static str, raw: &str) -> Result<u16, ConfigLoadError> {
    raw.parse().map_err(|_| ConfigLoadError::InvalidPort {
        name,
        value: raw.to_string(),
    })
}

fn parse_endpoint(name: &'static str, raw: &str) -> Result<Url, ConfigLoadError> {
    Url::parse(raw).map_err(|_| ConfigLoadError::InvalidUrl {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parsing() {
        assert_eq!(parse_port("RIPPLE_PORT", "8080").unwrap(), 8080);
        assert!(parse_port("RIPPLE_PORT", "eighty").is_err());
        assert!(parse_port("RIPPLE_PORT", "99999").is_err());
    }

    #[test]
    fn endpoint_parsing() {
        let url = parse_endpoint("RIPPLE_UPLOAD_URL", "https://uploads.example/v1").unwrap();
        assert_eq!(url.host_str(), Some("uploads.example"));
        assert!(parse_endpoint("RIPPLE_UPLOAD_URL", "not a url").is_err());
    }
}
