//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.nimbus/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A `.env` file in the working directory is loaded by `main` before this
//! runs, so its entries count as env vars.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::weather::providers::openweather::DEFAULT_OPENWEATHER_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NimbusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub openweather: OpenWeatherConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OpenWeatherConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const API_KEY_ENV: &str = "OPEN_WEATHER_API_KEY";
pub const BASE_URL_ENV: &str = "OPEN_WEATHER_BASE_URL";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// None when neither env nor file provide a non-blank key.
    pub api_key: Option<String>,
    pub base_url: String,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.nimbus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nimbus").join("config.toml"))
}

/// Load config from `~/.nimbus/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NimbusConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NimbusConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(NimbusConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<NimbusConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NimbusConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NimbusConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!(
        "Config: log_level={:?}, base_url={:?}, api_key set={}",
        config.general.log_level,
        config.openweather.base_url,
        config.openweather.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Nimbus Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars (including .env).

# [general]
# log_level = "debug"                 # "off", "error", "warn", "info", "debug", "trace"

# [openweather]
# api_key = "0123456789abcdef"        # Or set OPEN_WEATHER_API_KEY env var
# base_url = "https://api.openweathermap.org"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config against the process environment.
pub fn resolve(config: &NimbusConfig) -> ResolvedConfig {
    resolve_with(config, |name| std::env::var(name).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env.
///
/// `env` looks up a variable by name, so callers can resolve without
/// touching the process environment.
pub fn resolve_with(config: &NimbusConfig, env: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    // API key: env → config. Blank values count as unset.
    let api_key = env(API_KEY_ENV)
        .filter(|k| !k.trim().is_empty())
        .or_else(|| config.openweather.api_key.clone())
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    // Base URL: env → config → default
    let base_url = env(BASE_URL_ENV)
        .or_else(|| config.openweather.base_url.clone())
        .unwrap_or_else(|| DEFAULT_OPENWEATHER_BASE_URL.to_string());

    ResolvedConfig {
        api_key,
        base_url,
        log_level: resolve_log_level(config),
    }
}

fn resolve_log_level(config: &NimbusConfig) -> LevelFilter {
    match config.general.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    }
}
