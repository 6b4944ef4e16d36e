use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::report::{
    DEFAULT_METHOD, DEFAULT_REQUEST_PREVIEW_CHARS, DEFAULT_RESPONSE_PREVIEW_CHARS, DEFAULT_TITLE,
    DEFAULT_URL_CONTAINS,
};

/// Which exchange records count as spin requests (`[predicate]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredicateConfig {
    /// Substring the request URL must contain.
    pub url_contains: String,
    /// HTTP method the request must use, compared exactly.
    pub method: String,
}

impl Default for PredicateConfig {
    fn default() -> Self {
        Self {
            url_contains: DEFAULT_URL_CONTAINS.to_string(),
            method: DEFAULT_METHOD.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/spinscan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinScanConfig {
    /// First line of every report.
    pub report_title: String,
    /// Characters of the request body shown per section.
    pub request_preview_chars: usize,
    /// Characters of the response body shown per section.
    pub response_preview_chars: usize,
    pub predicate: PredicateConfig,
}

impl Default for SpinScanConfig {
    fn default() -> Self {
        Self {
            report_title: DEFAULT_TITLE.to_string(),
            request_preview_chars: DEFAULT_REQUEST_PREVIEW_CHARS,
            response_preview_chars: DEFAULT_RESPONSE_PREVIEW_CHARS,
            predicate: PredicateConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("spinscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SpinScanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SpinScanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SpinScanConfig = toml::from_str(&data)?;
    Ok(cfg)
}
