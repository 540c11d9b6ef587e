//! Centralized path definitions for cosmic-truth
//!
//! ```text
//! <config dir>/cosmic-truth/
//! └── config.toml               # Server, storage, auth tokens
//!
//! <data dir>/cosmic-truth/
//! └── claims.json               # Claim ledger (file backend)
//! ```
//!
//! `<config dir>` and `<data dir>` follow the platform conventions of the
//! `dirs` crate (XDG on Linux).

use std::path::PathBuf;

/// Application directory name under the platform config/data dirs
pub const APP_DIR: &str = "cosmic-truth";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the default data directory (claim ledger lives here).
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
