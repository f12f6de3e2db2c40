use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::guard::SourceGuard;
use crate::policy::ValidatorOptions;

/// Default `EnvFilter` directive when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,urlgate=debug";

/// Logging section (`[logging]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/urlgate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlgateConfig {
    /// Validator options; anything left out falls back to the built-in defaults.
    pub validator: ValidatorOptions,
    pub logging: LoggingConfig,
}

impl UrlgateConfig {
    /// Builds a guard from the `[validator]` section, with `overrides` layered on top.
    pub fn guard(&self, overrides: ValidatorOptions) -> Result<SourceGuard> {
        let options = self.validator.clone().merge(overrides);
        SourceGuard::from_options(options).context("build source guard from config")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<UrlgateConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: UrlgateConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
