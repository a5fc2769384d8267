//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kitty-reader/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Provider;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReaderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_provider: Option<String>,
    pub initial_text: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INITIAL_TEXT: &str =
    "Привет, как дела? Меня зовут Котёнок. Давай читать вместе!";

// ============================================================================
// Resolved Config (concrete values where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider: Provider,
    pub initial_text: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: Option<String>,
    pub gemini_model: Option<String>,
}

/// Values taken from the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub provider: Option<Provider>,
    pub initial_text: Option<String>,
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

/// Returns the path to `~/.kitty-reader/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kitty-reader").join("config.toml"))
}

/// Load config from `~/.kitty-reader/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReaderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReaderConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReaderConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ReaderConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ReaderConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ReaderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", redacted(&config));
    Ok(config)
}

/// Debug view of the config with the API key masked.
fn redacted(config: &ReaderConfig) -> String {
    format!(
        "general={:?}, gemini.base_url={:?}, gemini.model={:?}, gemini.api_key={}",
        config.general,
        config.gemini.base_url,
        config.gemini.model,
        if config.gemini.api_key.is_some() { "<set>" } else { "<unset>" }
    )
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Kitty Reader Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_provider = "local"         # "local" or "gemini"
# initial_text = "Мама мыла раму."

# [gemini]
# api_key = "AIza..."                # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# model = "gemini-2.5-flash"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve against the process environment. See [`resolve_with_env`].
pub fn resolve(config: &ReaderConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `env` looks up environment variables; tests pass a closure instead of
/// touching the process environment.
pub fn resolve_with_env(
    config: &ReaderConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli
        .provider
        .or_else(|| env("KITTY_READER_PROVIDER").and_then(|s| parse_provider(&s)))
        .or_else(|| {
            config
                .general
                .default_provider
                .as_deref()
                .and_then(parse_provider)
        })
        .unwrap_or_default();

    // Initial text: CLI → config → default
    let initial_text = cli
        .initial_text
        .clone()
        .or_else(|| config.general.initial_text.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_TEXT.to_string());

    // Gemini settings: env → config (provider fills in its own defaults)
    let gemini_api_key = env("GEMINI_API_KEY")
        .or_else(|| env("API_KEY"))
        .or_else(|| config.gemini.api_key.clone());
    let gemini_base_url = env("GEMINI_BASE_URL").or_else(|| config.gemini.base_url.clone());
    let gemini_model = env("GEMINI_MODEL").or_else(|| config.gemini.model.clone());

    ResolvedConfig {
        provider,
        initial_text,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
    }
}

fn parse_provider(name: &str) -> Option<Provider> {
    let parsed = Provider::from_name(name);
    if parsed.is_none() {
        warn!("Unknown provider {:?}, ignoring", name);
    }
    parsed
}
