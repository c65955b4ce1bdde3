use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::renko::PrecursorConfig;

pub const CONFIG_PATH_ENV: &str = "RENKO_LAB_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub renko: RenkoConfig,
    #[serde(default)]
    pub precursor: PrecursorConfig,
    #[serde(default)]
    pub signal: SignalConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenkoConfig {
    pub brick_size: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    #[serde(default = "default_min_vol_lag")]
    pub min_vol_lag: f64,
    #[serde(default = "default_min_squeeze")]
    pub min_squeeze: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            min_vol_lag: default_min_vol_lag(),
            min_squeeze: default_min_squeeze(),
        }
    }
}

fn default_min_vol_lag() -> f64 {
    1.5
}

fn default_min_squeeze() -> u32 {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub csv_path: PathBuf,
    /// JSON-lines destination for annotated bricks; stdout when unset.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Resolve the config path from `RENKO_LAB_CONFIG` (after reading `.env`)
    /// and load it, falling back to `config/default.toml`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(Path::new(&path))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::parse(&config_str)
            .with_context(|| format!("failed to load {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let size = self.renko.brick_size;
        if !(size.is_finite() && size > 0.0) {
            bail!("renko.brick_size must be > 0, got {}", size);
        }
        if self.precursor.window == 0 {
            bail!("precursor.window must be > 0");
        }
        if self.precursor.squeeze_window == 0 {
            bail!("precursor.squeeze_window must be > 0");
        }
        if !self.signal.min_vol_lag.is_finite() {
            bail!("signal.min_vol_lag must be finite");
        }
        Ok(())
    }
}
