//! Configuration management
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. `config.toml` (default `<config dir>/cosmic-truth/config.toml`)
//! 2. `COSMIC_*` environment variables
//! 3. Command-line flags (applied by the binary)

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::{JsonFileClaimStore, MemoryClaimStore, TokenIdentity};
use crate::api::{ApiState, DEFAULT_MAX_CLAIM_CHARS};
use crate::core::ports::ClaimStore;
use crate::paths;

/// Environment variable overriding `server.host`
pub const ENV_HOST: &str = "COSMIC_HOST";
/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "COSMIC_PORT";
/// Environment variable overriding `storage.backend`
pub const ENV_STORAGE: &str = "COSMIC_STORAGE";
/// Environment variable overriding `storage.data_dir`
pub const ENV_DATA_DIR: &str = "COSMIC_DATA_DIR";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// An override carried an unusable value
    #[error("invalid value for {key}: {message}")]
    Invalid {
        /// Setting name
        key: String,
        /// What was wrong
        message: String,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Claim storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Claim submission settings
    #[serde(default)]
    pub claims: ClaimsConfig,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    7878
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON ledger in the data directory (default)
    #[default]
    File,
    /// Process memory, lost on exit
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "files" | "json" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(format!("Unknown backend: {s}. Use 'file' or 'memory'")),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Claim storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which backend to use
    #[serde(default)]
    pub backend: StorageBackend,
    /// Data directory for the file backend (default: platform data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Effective data directory
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(paths::data_dir)
    }

    /// Open the configured claim store
    #[must_use]
    pub fn open_store(&self) -> Box<dyn ClaimStore> {
        match self.backend {
            StorageBackend::File => Box::new(JsonFileClaimStore::in_dir(&self.data_dir())),
            StorageBackend::Memory => Box::new(MemoryClaimStore::new()),
        }
    }
}

/// Claim submission settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClaimsConfig {
    /// Maximum claim length in characters (0 = unlimited)
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

const fn default_max_text_chars() -> usize {
    DEFAULT_MAX_CLAIM_CHARS
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            max_text_chars: default_max_text_chars(),
        }
    }
}

/// Authentication settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token to user id
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

impl AuthConfig {
    /// Identity provider over the configured tokens
    #[must_use]
    pub fn identity(&self) -> TokenIdentity {
        TokenIdentity::new(self.tokens.clone())
    }
}

impl AppConfig {
    /// Get the default config file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_file()
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise. Environment
    /// overrides are applied afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply `COSMIC_*` overrides looked up through `lookup`
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_PORT.to_string(),
                message: format!("'{port}' is not a port number"),
            })?;
        }
        if let Some(backend) = lookup(ENV_STORAGE) {
            self.storage.backend = backend.parse().map_err(|message| ConfigError::Invalid {
                key: ENV_STORAGE.to_string(),
                message,
            })?;
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Build handler state from this configuration
    #[must_use]
    pub fn api_state(&self) -> ApiState {
        ApiState::new(self.storage.open_store(), Box::new(self.auth.identity()))
            .with_max_claim_chars(self.claims.max_text_chars)
    }
}
