//! Analysis configuration for netgraph
//!
//! Looked up in `$NETGRAPH_CONFIG_DIR/config.toml`, falling back to
//! `<user config dir>/netgraph/config.toml`. An explicit path always wins.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use tracing::debug;

pub use types::AnalysisConfig;

const CONFIG_DIR: &str = "netgraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NETGRAPH_CONFIG_DIR";

/// Location of the config file given an optional directory override
fn config_path_in(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    let config_dir = match override_dir {
        Some(dir) => dir,
        None => dirs::config_dir()
            .ok_or_else(|| GraphError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR),
    };

    Ok(config_dir.join(CONFIG_FILE))
}

impl AnalysisConfig {
    /// Default config file location, honouring `NETGRAPH_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        config_path_in(std::env::var_os(CONFIG_DIR_ENV_VAR).map(PathBuf::from))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: AnalysisConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit config file, or the default one if it exists
    ///
    /// A missing default file yields the built-in defaults; a missing explicit
    /// file is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "config_defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "config_loaded");
        Self::load(&path)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                GraphError::io_operation("create config directory", dir.display(), e)
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
