use crate::retry::{Backoff, BackoffCurve};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per operation (including the first).
    /// Consumed by the outer retry loop; nothing here counts attempts.
    pub max_attempts: u32,
    /// Base delay in seconds (e.g. 0.1 = 100ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
    /// Backoff growth curve: "constant", "linear", or "exponential".
    #[serde(default)]
    pub backoff: BackoffCurve,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 25,
            base_delay_secs: 0.1,
            max_delay_secs: 30,
            backoff: BackoffCurve::Constant,
        }
    }
}

impl RetryConfig {
    /// Base delay as a duration. Values a config file can express but a
    /// duration cannot hold clamp instead of panicking: negative or NaN to
    /// zero, oversized or infinite to `max_delay_secs`.
    pub fn base_delay(&self) -> Duration {
        let max = Duration::from_secs(self.max_delay_secs);
        match Duration::try_from_secs_f64(self.base_delay_secs) {
            Ok(d) => d.min(max),
            Err(_) if self.base_delay_secs > 0.0 => max,
            Err(_) => Duration::ZERO,
        }
    }

    pub fn backoff(&self) -> Backoff {
        Backoff {
            curve: self.backoff,
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Table binding loaded from `~/.config/kvfault/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    /// Remote table name. Must be non-empty before any operation runs.
    pub table: String,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl TableConfig {
    pub fn named(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            retry: None,
        }
    }

    /// Effective retry parameters, falling back to defaults.
    pub fn retry(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("kvfault")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TableConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TableConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TableConfig = toml::from_str(&data)?;
    Ok(cfg)
}
