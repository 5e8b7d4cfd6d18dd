//! # CLI Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --tip 18 --tip-mode fixed --tip-included --detail                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TABSPLIT_CURRENCY_SYMBOL=€                                         │
//! │     TABSPLIT_TIP=18                                                    │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/tabsplit/tabsplit.toml (Linux)                           │
//! │     ~/Library/Application Support/com.tabsplit.tabsplit/... (macOS)    │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     $ with 2 decimals, no tip                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tabsplit.toml
//! [currency]
//! symbol = "€"
//! decimals = 2
//!
//! [tip]
//! mode = "percentage"   # percentage | fixed
//! value = 18
//! included = false      # true when service is already on the bill
//!
//! [output]
//! detail = true
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tabsplit_core::{CurrencyFormat, TipMode, TipPolicy};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "tabsplit.toml";

/// Decimals above this are almost certainly a typo.
const MAX_CURRENCY_DECIMALS: usize = 6;

// =============================================================================
// Sections
// =============================================================================

/// How amounts are printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: default_symbol(),
            decimals: default_decimals(),
        }
    }
}

/// Tip used when neither the bill file nor the flags set one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipSettings {
    #[serde(default)]
    pub mode: TipMode,

    #[serde(default)]
    pub value: f64,

    #[serde(default)]
    pub included: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Always print per-item detail.
    #[serde(default)]
    pub detail: bool,
}

// =============================================================================
// CliConfig
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub tip: TipSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl CliConfig {
    /// Loads the configuration: file, then environment.
    ///
    /// An explicit `path` must exist. Without one, the platform config file
    /// is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => CliConfig::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => CliConfig::from_file(&path)?,
                _ => {
                    debug!("no config file, using defaults");
                    CliConfig::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| CliError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Applies `TABSPLIT_*` overrides read through `lookup`.
    ///
    /// ## Environment Variables
    /// - `TABSPLIT_CURRENCY_SYMBOL`: e.g. "€"
    /// - `TABSPLIT_CURRENCY_DECIMALS`: e.g. "0"
    /// - `TABSPLIT_TIP_MODE`: "percentage" or "fixed"
    /// - `TABSPLIT_TIP`: tip value (unparsable text counts as 0)
    /// - `TABSPLIT_TIP_INCLUDED`: "true"/"1" when service is on the bill
    ///
    /// Unusable values are logged and ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("TABSPLIT_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }

        if let Some(decimals) = lookup("TABSPLIT_CURRENCY_DECIMALS") {
            match decimals.trim().parse::<usize>() {
                Ok(decimals) => self.currency.decimals = decimals,
                Err(_) => warn!(%decimals, "ignoring TABSPLIT_CURRENCY_DECIMALS"),
            }
        }

        if let Some(mode) = lookup("TABSPLIT_TIP_MODE") {
            match mode.parse::<TipMode>() {
                Ok(mode) => self.tip.mode = mode,
                Err(err) => warn!(%mode, %err, "ignoring TABSPLIT_TIP_MODE"),
            }
        }

        if let Some(value) = lookup("TABSPLIT_TIP") {
            self.tip.value = TipPolicy::parse_value(&value);
        }

        if let Some(included) = lookup("TABSPLIT_TIP_INCLUDED") {
            match included.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.tip.included = true,
                "0" | "false" | "no" => self.tip.included = false,
                _ => warn!(%included, "ignoring TABSPLIT_TIP_INCLUDED"),
            }
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.currency.decimals > MAX_CURRENCY_DECIMALS {
            return Err(CliError::Config(format!(
                "currency.decimals must be at most {MAX_CURRENCY_DECIMALS}, got {}",
                self.currency.decimals
            )));
        }
        Ok(())
    }

    /// Default tip policy from the `[tip]` section.
    pub fn tip_policy(&self) -> TipPolicy {
        TipPolicy::new(self.tip.mode, self.tip.value).with_included(self.tip.included)
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency.symbol.clone(), self.currency.decimals)
    }
}

/// Platform config file location, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "tabsplit", "tabsplit")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.currency.symbol, "$");
        assert_eq!(config.currency.decimals, 2);
        assert_eq!(config.tip_policy(), TipPolicy::default());
        assert!(!config.output.detail);
    }

    #[test]
    fn test_from_file_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[currency]\nsymbol = \"€\"\n\n[tip]\nvalue = 18").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();

        assert_eq!(config.currency.symbol, "€");
        assert_eq!(config.currency.decimals, 2);
        assert_eq!(config.tip_policy(), TipPolicy::percentage(18.0));
    }

    #[test]
    fn test_from_file_errors() {
        let missing = Path::new("/definitely/not/here/tabsplit.toml");
        assert!(matches!(
            CliConfig::from_file(missing),
            Err(CliError::Read { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tip\nvalue = ").unwrap();
        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(CliError::Toml { .. })
        ));
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = CliConfig::default();
        config.apply_env(env(&[
            ("TABSPLIT_CURRENCY_SYMBOL", "£"),
            ("TABSPLIT_CURRENCY_DECIMALS", "0"),
            ("TABSPLIT_TIP_MODE", "fixed"),
            ("TABSPLIT_TIP", "10"),
            ("TABSPLIT_TIP_INCLUDED", "yes"),
        ]));

        assert_eq!(config.currency_format(), CurrencyFormat::new("£", 0));
        assert_eq!(config.tip_policy(), TipPolicy::fixed(10.0).with_included(true));
    }

    #[test]
    fn test_apply_env_ignores_bad_values() {
        let mut config = CliConfig::default();
        config.apply_env(env(&[
            ("TABSPLIT_CURRENCY_DECIMALS", "two"),
            ("TABSPLIT_TIP_MODE", "generous"),
            ("TABSPLIT_TIP", "lots"),
            ("TABSPLIT_TIP_INCLUDED", "maybe"),
        ]));

        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_validate_rejects_silly_decimals() {
        let mut config = CliConfig::default();
        config.currency.decimals = 12;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }
}
