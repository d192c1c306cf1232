//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mcp-hub/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HubConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InventoryConfig {
    pub path: Option<String>,
    pub seed_defaults: Option<bool>,
}

/// Values taken from command-line flags. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub inventory: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_seed: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const HUB_DIR_NAME: &str = ".mcp-hub";
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";
pub const DEFAULT_LOG_FILE: &str = "mcp-hub.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_INVENTORY: &str = "MCP_HUB_INVENTORY";
pub const ENV_LOG_LEVEL: &str = "MCP_HUB_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub inventory_path: PathBuf,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
    pub seed_defaults: bool,
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

/// `~/.mcp-hub`, or `./.mcp-hub` when there is no home directory.
pub fn hub_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(HUB_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(HUB_DIR_NAME))
}

/// Returns the path to `~/.mcp-hub/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(HUB_DIR_NAME).join("config.toml"))
}

/// Load config from `~/.mcp-hub/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HubConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HubConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HubConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<HubConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(HubConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HubConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# MCP Hub Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "mcp-hub.log"           # Relative to ~/.mcp-hub/

# [inventory]
# path = "inventory.json"            # Relative to ~/.mcp-hub/, or set MCP_HUB_INVENTORY
# seed_defaults = true               # Write the built-in MCP set into an empty inventory
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HubConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, &hub_dir(), |key| std::env::var(key).ok())
}

/// `resolve` with the base directory and environment supplied by the caller.
pub fn resolve_with(
    config: &HubConfig,
    cli: &CliOverrides,
    base: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Inventory: CLI → env → config (relative to base) → default
    let inventory_path = cli
        .inventory
        .clone()
        .or_else(|| env(ENV_INVENTORY).map(PathBuf::from))
        .or_else(|| config.inventory.path.as_deref().map(|p| base.join(p)))
        .unwrap_or_else(|| base.join(DEFAULT_INVENTORY_FILE));

    let log_path = config
        .general
        .log_file
        .as_deref()
        .map(|p| base.join(p))
        .unwrap_or_else(|| base.join(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default. Unparseable values fall through.
    let log_level = [
        cli.log_level.clone(),
        env(ENV_LOG_LEVEL),
        config.general.log_level.clone(),
    ]
    .into_iter()
    .flatten()
    .find_map(|level| level.parse::<LevelFilter>().ok())
    .unwrap_or(DEFAULT_LOG_LEVEL);

    let seed_defaults = !cli.no_seed && config.inventory.seed_defaults.unwrap_or(true);

    ResolvedConfig {
        inventory_path,
        log_path,
        log_level,
        seed_defaults,
    }
}
