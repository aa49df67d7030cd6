use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::HostMatch;

/// XDG prefix shared by config, data and state files.
pub const APP_PREFIX: &str = "redirmap";

/// File name of the rules store under the XDG data dir.
pub const RULES_FILE_NAME: &str = "domains.json";

/// Status probe parameters (optional `[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Per-host request timeout in seconds (connect + response).
    pub timeout_secs: u64,
    /// Scheme used to reach each configured host. Plain HTTP by default since
    /// redirects usually start there.
    pub scheme: String,
    /// Maximum number of hosts probed at once.
    pub concurrency: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            scheme: "http".to_string(),
            concurrency: 4,
        }
    }
}

/// Global configuration loaded from `~/.config/redirmap/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirmapConfig {
    /// Rules file; defaults to `~/.local/share/redirmap/domains.json`.
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    /// How request hosts are compared with stored keys: "exact" (default) or "case-insensitive".
    #[serde(default)]
    pub host_match: HostMatch,
    /// Seconds a front door waits before following the redirect.
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_secs: u32,
    /// Optional probe settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub probe: Option<ProbeConfig>,
}

fn default_redirect_delay() -> u32 {
    3
}

impl Default for RedirmapConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            host_match: HostMatch::Exact,
            redirect_delay_secs: default_redirect_delay(),
            probe: None,
        }
    }
}

impl RedirmapConfig {
    /// Rules file to use: `override_path`, then `rules_path`, then the XDG default.
    pub fn resolve_rules_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = override_path {
            return Ok(p.to_path_buf());
        }
        match &self.rules_path {
            Some(p) => Ok(p.clone()),
            None => default_rules_path(),
        }
    }

    pub fn probe_config(&self) -> ProbeConfig {
        self.probe.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Default rules file: `~/.local/share/redirmap/domains.json` (parent created).
pub fn default_rules_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_data_file(RULES_FILE_NAME)?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RedirmapConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<RedirmapConfig> {
    if !path.exists() {
        let default_cfg = RedirmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RedirmapConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
