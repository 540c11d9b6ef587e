//! Shared command context: loaded configuration plus output mode

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cosmic_truth::api::ApiError;
use cosmic_truth::config::AppConfig;
use cosmic_truth::core::models::UserId;
use cosmic_truth::output::OutputMode;

/// Configuration and output settings for a command run
#[derive(Debug)]
pub struct Context {
    /// Effective configuration (file, env, flags)
    pub config: AppConfig,
    /// Output mode
    pub mode: OutputMode,
}

impl Context {
    /// Load config from `path` (or the default location) and apply CLI overrides
    pub fn load(
        path: Option<&Path>,
        data_dir: Option<PathBuf>,
        mode: OutputMode,
    ) -> anyhow::Result<Self> {
        let mut config = AppConfig::load(path).context("Failed to load configuration")?;
        if let Some(dir) = data_dir {
            config.storage.data_dir = Some(dir);
        }
        log::debug!(
            "storage backend {} at {}",
            config.storage.backend,
            config.storage.data_dir().display()
        );
        Ok(Self { config, mode })
    }
}

/// Turn a `--user` flag into a caller identity
pub fn caller(user: Option<&str>) -> Option<UserId> {
    user.and_then(UserId::new)
}

/// Convert an API error into a CLI error
pub fn api_failure(err: ApiError) -> anyhow::Error {
    anyhow::anyhow!("{}", err.message)
}
