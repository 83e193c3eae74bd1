//! Config file discovery, parsing and command-line overrides.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use log::debug;
use serde::Deserialize;

use super::{AppConfig, ConfigError};
use crate::models::SourcePlatform;

const CONFIG_DIR_NAME: &str = env!("CARGO_PKG_NAME");
const CONFIG_FILE_NAME: &str = "config.toml";

/// Raw contents of `config.toml` before validation.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub seed: Option<u64>,
    pub email_domain: Option<String>,
    #[serde(default)]
    pub counts: BTreeMap<String, toml::Value>,
    #[serde(default)]
    pub display: BTreeMap<String, String>,
    #[serde(default)]
    pub channels: BTreeMap<String, String>,
    pub pools: Option<PoolsFile>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct PoolsFile {
    pub names: Vec<String>,
    pub messages: Vec<String>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

/// `--count PLATFORM=N` override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOverride {
    pub platform: SourcePlatform,
    pub count: u32,
}

impl FromStr for CountOverride {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, value) =
            s.split_once('=').ok_or_else(|| ConfigError::InvalidOverride(s.to_string()))?;
        let platform = SourcePlatform::from_str(tag)?;
        let value = value.trim();
        let parsed: i64 = value.parse().map_err(|_| ConfigError::InvalidCount {
            platform: platform.to_string(),
            value: value.to_string(),
        })?;
        let count = checked_count(platform.as_str(), parsed)?;
        Ok(Self { platform, count })
    }
}

fn checked_count(platform: &str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeCount { platform: platform.to_string(), value });
    }
    u32::try_from(value).map_err(|_| ConfigError::InvalidCount {
        platform: platform.to_string(),
        value: value.to_string(),
    })
}

pub(crate) fn count_from_toml(platform: &str, value: &toml::Value) -> Result<u32, ConfigError> {
    match value.as_integer() {
        Some(n) => checked_count(platform, n),
        None => Err(ConfigError::InvalidCount {
            platform: platform.to_string(),
            value: value.to_string(),
        }),
    }
}

/// `$XDG_CONFIG_HOME/mock-inbox/config.toml`, else `$HOME/.config/mock-inbox/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(env::var("XDG_CONFIG_HOME").ok().as_deref(), env::var("HOME").ok().as_deref())
}

fn config_path_from(xdg_config: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    let base = match (xdg_config, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) => PathBuf::from(home).join(".config"),
        _ => return None,
    };
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Load configuration for a run.
    ///
    /// An explicit path must exist. Without one, the XDG location is used when present
    /// and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => default_config_path().filter(|p| p.exists()),
        };

        let Some(path) = path else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        debug!("loading config from {}", path.display());
        let file = ConfigFile::load(&path)?;
        let config = Self::from_file(&file)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        debug!("loaded config: {:?}", config);
        Ok(config)
    }
}
