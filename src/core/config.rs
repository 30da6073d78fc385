//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.mushaf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A terminal reports no light/dark preference, so the configured theme is
//! the "device default" and `--theme` is the explicit override.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::state::Tab;
use crate::core::theme::ThemeMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MushafConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub theme: Option<ThemeMode>,
    pub start_tab: Option<StartTab>,
    pub show_translation: Option<bool>,
}

/// Which list the browse screen opens on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    Chapters,
    Sections,
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Tab {
        match tab {
            StartTab::Chapters => Tab::Chapters,
            StartTab::Sections => Tab::Sections,
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Clone, Copy, Debug)]
pub struct ResolvedConfig {
    pub theme: ThemeMode,
    pub start_tab: Tab,
    /// Show the English translation line under each chapter row.
    pub show_translation: bool,
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

/// Returns the path to `~/.mushaf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mushaf").join("config.toml"))
}

/// Load config from `~/.mushaf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MushafConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MushafConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MushafConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MushafConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MushafConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Mushaf Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [general]
# theme = "light"              # "light" or "dark"
# start_tab = "chapters"       # "chapters" (Surahs) or "sections" (Juz')
# show_translation = true      # English translation line under chapter rows
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

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_theme` is the `--theme` flag (None = not specified).
pub fn resolve(config: &MushafConfig, cli_theme: Option<ThemeMode>) -> ResolvedConfig {
    let theme = cli_theme.or(config.general.theme).unwrap_or_default();

    let start_tab = config
        .general
        .start_tab
        .map(Tab::from)
        .unwrap_or(Tab::Chapters);

    ResolvedConfig {
        theme,
        start_tab,
        show_translation: config.general.show_translation.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MushafConfig::default();
        assert!(config.general.theme.is_none());
        assert!(config.general.start_tab.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MushafConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.theme, ThemeMode::Light);
        assert_eq!(resolved.start_tab, Tab::Chapters);
        assert!(resolved.show_translation);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let toml_str = r#"
[general]
theme = "dark"
start_tab = "sections"
show_translation = false
"#;
        let config: MushafConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.theme, ThemeMode::Dark);
        assert_eq!(resolved.start_tab, Tab::Sections);
        assert!(!resolved.show_translation);
    }

    #[test]
    fn test_resolve_cli_theme_wins() {
        let toml_str = r#"
[general]
theme = "dark"
"#;
        let config: MushafConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, Some(ThemeMode::Light));
        assert_eq!(resolved.theme, ThemeMode::Light);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
start_tab = "sections"
"#;
        let config: MushafConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_tab, Some(StartTab::Sections));
        assert!(config.general.theme.is_none());
        assert!(config.general.show_translation.is_none());
    }

    #[test]
    fn test_unknown_theme_value_is_a_parse_error() {
        let toml_str = r#"
[general]
theme = "sepia"
"#;
        assert!(toml::from_str::<MushafConfig>(toml_str).is_err());
    }

    #[test]
    fn test_empty_file_parses_as_default() {
        let config: MushafConfig = toml::from_str("").unwrap();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.theme, ThemeMode::Light);
    }
}
