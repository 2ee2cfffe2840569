//! # Report Configuration
//!
//! Bonus tiers and output settings for the report generator.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by the binary)       │
//! │     --format table                                                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SALES_REPORT_FORMAT=table                                          │
//! │     SALES_BONUS_FIRST_BPS=2000                                         │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/sales-report/report.toml (Linux)                         │
//! │     ~/Library/Application Support/com.sales.sales-report/report.toml   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     15% / 10% / 5% / 0% bonus tiers, pretty JSON output                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # report.toml
//! [bonus]
//! first_bps = 1500      # rank 0
//! runner_up_bps = 1000  # ranks 1 and 2
//! standard_bps = 500    # everyone else
//! last_bps = 0          # rank total - 1
//!
//! [output]
//! format = "json"  # json | table
//! pretty = true
//! ```

use sales_core::money::{BonusRate, BPS_SCALE};
use sales_core::TieredBonus;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ReportError, ReportResult};

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_FORMAT: &str = "SALES_REPORT_FORMAT";
pub const ENV_BONUS_FIRST: &str = "SALES_BONUS_FIRST_BPS";
pub const ENV_BONUS_RUNNER_UP: &str = "SALES_BONUS_RUNNER_UP_BPS";
pub const ENV_BONUS_STANDARD: &str = "SALES_BONUS_STANDARD_BPS";
pub const ENV_BONUS_LAST: &str = "SALES_BONUS_LAST_BPS";

// =============================================================================
// Output Format
// =============================================================================

/// How the finished report is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON array of report entries, field names as in the core types.
    #[default]
    Json,

    /// Fixed-width text table for terminals.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" | "text" => Ok(OutputFormat::Table),
            other => Err(ReportError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: json, table",
                other
            ))),
        }
    }
}

// =============================================================================
// Bonus Settings
// =============================================================================

/// Rank-tier bonus rates in basis points (1500 = 15%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSettings {
    /// Rate for the most profitable seller.
    #[serde(default = "default_first_bps")]
    pub first_bps: u32,

    /// Rate for ranks 1 and 2.
    #[serde(default = "default_runner_up_bps")]
    pub runner_up_bps: u32,

    /// Rate for every rank not covered by another tier.
    #[serde(default = "default_standard_bps")]
    pub standard_bps: u32,

    /// Rate for the least profitable seller.
    #[serde(default = "default_last_bps")]
    pub last_bps: u32,
}

fn default_first_bps() -> u32 {
    1500
}

fn default_runner_up_bps() -> u32 {
    1000
}

fn default_standard_bps() -> u32 {
    500
}

fn default_last_bps() -> u32 {
    0
}

impl Default for BonusSettings {
    fn default() -> Self {
        BonusSettings {
            first_bps: default_first_bps(),
            runner_up_bps: default_runner_up_bps(),
            standard_bps: default_standard_bps(),
            last_bps: default_last_bps(),
        }
    }
}

impl BonusSettings {
    /// Builds the bonus policy these settings describe.
    pub fn to_policy(&self) -> TieredBonus {
        TieredBonus {
            first: BonusRate::from_bps(self.first_bps),
            runner_up: BonusRate::from_bps(self.runner_up_bps),
            standard: BonusRate::from_bps(self.standard_bps),
            last: BonusRate::from_bps(self.last_bps),
        }
    }

    fn tiers(&self) -> [(&'static str, u32); 4] {
        [
            ("bonus.first_bps", self.first_bps),
            ("bonus.runner_up_bps", self.runner_up_bps),
            ("bonus.standard_bps", self.standard_bps),
            ("bonus.last_bps", self.last_bps),
        ]
    }
}

// =============================================================================
// Output Settings
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent JSON output. Ignored for tables.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

// =============================================================================
// Main Report Configuration
// =============================================================================

/// Complete report configuration.
///
/// ## Example Config File
/// ```toml
/// [bonus]
/// first_bps = 2000
/// runner_up_bps = 1200
///
/// [output]
/// format = "table"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub bonus: BonusSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl ReportConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (report.toml)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the platform default path is
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> ReportResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                info!(?path, "Loading report config from file");
                Self::from_toml(&std::fs::read_to_string(&path)?)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading report config from file");
                    Self::from_toml(&std::fs::read_to_string(&path)?)?
                }
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> ReportResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> ReportResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ReportResult<()> {
        for (key, bps) in self.bonus.tiers() {
            if bps > BPS_SCALE {
                return Err(ReportError::InvalidConfig(format!(
                    "{} must be at most {} (100%), got: {}",
                    key, BPS_SCALE, bps
                )));
            }
        }

        Ok(())
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse() {
                Ok(parsed) => {
                    debug!(format = %format, "Overriding output format from environment");
                    self.output.format = parsed;
                }
                Err(_) => warn!(format = %format, "Unknown output format in environment"),
            }
        }

        let tiers = [
            (ENV_BONUS_FIRST, &mut self.bonus.first_bps),
            (ENV_BONUS_RUNNER_UP, &mut self.bonus.runner_up_bps),
            (ENV_BONUS_STANDARD, &mut self.bonus.standard_bps),
            (ENV_BONUS_LAST, &mut self.bonus.last_bps),
        ];
        for (key, slot) in tiers {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<u32>() {
                    Ok(bps) => {
                        debug!(key, bps, "Overriding bonus rate from environment");
                        *slot = bps;
                    }
                    Err(_) => warn!(key, value = %raw, "Ignoring non-numeric bonus rate"),
                }
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sales", "sales-report")
            .map(|dirs| dirs.config_dir().join("report.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.bonus.first_bps, 1500);
        assert_eq!(config.bonus.last_bps, 0);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert_eq!(config.bonus.to_policy(), TieredBonus::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ReportConfig::from_toml(
            r#"
            [bonus]
            first_bps = 2000

            [output]
            format = "table"
            "#,
        )
        .unwrap();

        assert_eq!(config.bonus.first_bps, 2000);
        assert_eq!(config.bonus.runner_up_bps, 1000);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ReportConfig::from_toml("").unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = ReportConfig::from_toml("[bonus\nfirst_bps = ").unwrap_err();
        assert!(matches!(err, ReportError::ConfigParse(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ReportConfig::default();
        assert!(config.validate().is_ok());

        config.bonus.standard_bps = 10_000;
        assert!(config.validate().is_ok());

        config.bonus.standard_bps = 10_001;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("bonus.standard_bps"));
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = ReportConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_FORMAT, "table"),
            (ENV_BONUS_FIRST, "2500"),
            (ENV_BONUS_LAST, " 100 "),
        ]));

        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.bonus.first_bps, 2500);
        assert_eq!(config.bonus.runner_up_bps, 1000);
        assert_eq!(config.bonus.last_bps, 100);
    }

    #[test]
    fn test_bad_overrides_ignored() {
        let mut config = ReportConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_FORMAT, "yaml"),
            (ENV_BONUS_RUNNER_UP, "ten percent"),
        ]));

        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = ReportConfig::default().to_toml().unwrap();
        assert!(toml_str.contains("[bonus]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("format = \"json\""));
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let path = std::env::temp_dir().join("sales-report-no-such-config.toml");
        let err = ReportConfig::load(Some(path)).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
