//! Configuration file support for pacbar.
//!
//! Provides YAML-based configuration through `pacbar.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! file values with CLI options into resolved runtime settings.

use crate::cli::OutputFormat;
use crate::shared::error::PacbarError;
use crate::shared::Result;
use crate::update_check::policies::VendorPolicy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "pacbar.config.yml";

/// Query commands used when the config file does not override them.
const DEFAULT_OFFICIAL_COMMAND: &[&str] = &["pacman", "-Qu"];
const DEFAULT_AUR_COMMAND: &[&str] = &["yay", "-Qua"];

/// Ceiling on one update-listing command; generous, the commands normally
/// finish in well under a second.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub official_command: Option<Vec<String>>,
    pub aur_command: Option<Vec<String>>,
    /// Vendor name patterns; `*` suffix selects prefix match. An empty list
    /// disables vendor classification.
    pub vendor_patterns: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content =
        std::fs::read_to_string(path).map_err(|e| PacbarError::ConfigReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| PacbarError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config under the user's config directory. Returns `None`
/// silently if no file exists; absence is not an error.
pub fn discover_config() -> Result<Option<ConfigFile>> {
    for dir in config_search_dirs() {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            eprintln!("Auto-discovered config file: {}", config_path.display());
            return load_config_from_path(&config_path).map(Some);
        }
    }
    Ok(None)
}

/// `$XDG_CONFIG_HOME/pacbar`, then `$HOME/.config/pacbar`.
fn config_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            dirs.push(PathBuf::from(xdg).join("pacbar"));
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            dirs.push(PathBuf::from(home).join(".config").join("pacbar"));
        }
    }
    dirs
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    validate_command(&config.official_command, "official_command")?;
    validate_command(&config.aur_command, "aur_command")?;

    if let Some(timeout) = config.timeout_secs {
        if timeout == 0 {
            return Err(PacbarError::ConfigValidation {
                message: "timeout_secs must be greater than 0".to_string(),
            }
            .into());
        }
    }

    if let Some(patterns) = &config.vendor_patterns {
        if patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(PacbarError::ConfigValidation {
                message: "vendor_patterns must not contain blank entries".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_command(command: &Option<Vec<String>>, field: &str) -> Result<()> {
    if let Some(argv) = command {
        if argv.is_empty() {
            return Err(PacbarError::ConfigValidation {
                message: format!("{} must not be an empty list", field),
            }
            .into());
        }
        if argv.iter().any(|arg| arg.trim().is_empty()) {
            return Err(PacbarError::ConfigValidation {
                message: format!("{} must not contain blank entries", field),
            }
            .into());
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️ Unknown config field ignored: {}", key);
    }
}

/// Resolved runtime settings: config file values merged with CLI options
/// and defaults. CLI wins over file, file wins over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub official_command: Vec<String>,
    pub aur_command: Vec<String>,
    pub vendor_policy: VendorPolicy,
    pub timeout: Duration,
}

impl Settings {
    pub fn resolve(cli_format: Option<OutputFormat>, config: ConfigFile) -> Result<Self> {
        let format = match cli_format {
            Some(format) => format,
            None => match config.format.as_deref() {
                Some(value) => value
                    .parse()
                    .map_err(|message| PacbarError::ConfigValidation { message })?,
                None => OutputFormat::Waybar,
            },
        };

        let vendor_policy = match &config.vendor_patterns {
            Some(patterns) => VendorPolicy::new(patterns),
            None => VendorPolicy::default(),
        };

        Ok(Self {
            format,
            official_command: argv_or_default(config.official_command, DEFAULT_OFFICIAL_COMMAND),
            aur_command: argv_or_default(config.aur_command, DEFAULT_AUR_COMMAND),
            vendor_policy,
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

fn argv_or_default(configured: Option<Vec<String>>, default: &[&str]) -> Vec<String> {
    configured.unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
}
