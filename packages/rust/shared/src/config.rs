//! Application configuration for catalogdash.
//!
//! User config lives at `~/.catalogdash/catalogdash.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "catalogdash.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".catalogdash";

// ---------------------------------------------------------------------------
// Config structs (matching catalogdash.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog source settings.
    #[serde(default)]
    pub data: DataConfig,

    /// Director ranking settings.
    #[serde(default)]
    pub directors: DirectorsConfig,

    /// Short-runtime trend settings.
    #[serde(default)]
    pub runtime_trend: RuntimeTrendConfig,
}

/// `[data]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the catalog CSV file.
    #[serde(default = "default_data_path")]
    pub path: String,

    /// Field delimiter of the catalog file.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_data_path() -> String {
    "data/netflix_titles.csv".into()
}
fn default_delimiter() -> char {
    ','
}

/// `[directors]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorsConfig {
    /// How many ranking positions to show before tie expansion.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for DirectorsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    5
}

/// `[runtime_trend]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeTrendConfig {
    /// Width of each bucket in release years.
    #[serde(default = "default_period_years")]
    pub period_years: i32,

    /// Movies at or below this runtime are ignored (shorts, specials).
    #[serde(default = "default_min_runtime")]
    pub min_runtime_minutes: u32,

    /// Movies at or below this runtime count as short.
    #[serde(default = "default_short_max")]
    pub short_runtime_max_minutes: u32,

    /// Buckets starting before this year are dropped.
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Label forced onto the last bucket. Empty string disables the override.
    #[serde(default = "default_final_bucket_label")]
    pub final_bucket_label: String,
}

impl Default for RuntimeTrendConfig {
    fn default() -> Self {
        Self {
            period_years: default_period_years(),
            min_runtime_minutes: default_min_runtime(),
            short_runtime_max_minutes: default_short_max(),
            start_year: default_start_year(),
            final_bucket_label: default_final_bucket_label(),
        }
    }
}

fn default_period_years() -> i32 {
    5
}
fn default_min_runtime() -> u32 {
    40
}
fn default_short_max() -> u32 {
    80
}
fn default_start_year() -> i32 {
    2000
}
fn default_final_bucket_label() -> String {
    "2020-2021".into()
}

// ---------------------------------------------------------------------------
// Report options (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime options for the short-runtime trend aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendOptions {
    /// Bucket width in years. Must be at least 1.
    pub period_years: i32,
    /// Exclusive lower runtime bound.
    pub min_runtime_minutes: u32,
    /// Inclusive upper runtime bound for "short".
    pub short_runtime_max_minutes: u32,
    /// First bucket start year kept in the output.
    pub start_year: i32,
    /// Replacement label for the last bucket, if any.
    pub final_bucket_label: Option<String>,
}

impl From<&RuntimeTrendConfig> for TrendOptions {
    fn from(config: &RuntimeTrendConfig) -> Self {
        let label = config.final_bucket_label.trim();
        Self {
            period_years: config.period_years,
            min_runtime_minutes: config.min_runtime_minutes,
            short_runtime_max_minutes: config.short_runtime_max_minutes,
            start_year: config.start_year,
            final_bucket_label: (!label.is_empty()).then(|| label.to_string()),
        }
    }
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self::from(&RuntimeTrendConfig::default())
    }
}

/// Runtime options for building a full dashboard report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Ranking positions for the top-directors table.
    pub top_n: usize,
    /// Short-runtime trend options.
    pub trend: TrendOptions,
}

impl From<&AppConfig> for ReportOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            top_n: config.directors.top_n,
            trend: TrendOptions::from(&config.runtime_trend),
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.catalogdash/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| CatalogError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.catalogdash/catalogdash.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| CatalogError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let path = config_file_path()?;
    write_default_config(&path)?;
    Ok(path)
}

/// Write the default config to `path`, creating parent directories.
pub fn write_default_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;
    }

    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| CatalogError::config(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| CatalogError::io(path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("netflix_titles.csv"));
        assert!(toml_str.contains("final_bucket_label"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.directors.top_n, 5);
        assert_eq!(parsed.runtime_trend.period_years, 5);
        assert_eq!(parsed.data.delimiter, ',');
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[data]
path = "/tmp/catalog.tsv"
delimiter = "\t"

[runtime_trend]
period_years = 10
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.data.path, "/tmp/catalog.tsv");
        assert_eq!(config.data.delimiter, '\t');
        assert_eq!(config.runtime_trend.period_years, 10);
        assert_eq!(config.runtime_trend.short_runtime_max_minutes, 80);
        assert_eq!(config.directors.top_n, 5);
    }

    #[test]
    fn report_options_from_app_config() {
        let options = ReportOptions::from(&AppConfig::default());
        assert_eq!(options.top_n, 5);
        assert_eq!(options.trend.min_runtime_minutes, 40);
        assert_eq!(options.trend.start_year, 2000);
        assert_eq!(options.trend.final_bucket_label.as_deref(), Some("2020-2021"));
    }

    #[test]
    fn empty_final_label_disables_override() {
        let config = RuntimeTrendConfig {
            final_bucket_label: "  ".into(),
            ..Default::default()
        };
        assert_eq!(TrendOptions::from(&config).final_bucket_label, None);
    }

    #[test]
    fn write_and_load_default_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        write_default_config(&path).expect("write config");
        let loaded = load_config_from(&path).expect("load config");
        assert_eq!(loaded.data.path, "data/netflix_titles.csv");
    }

    #[test]
    fn invalid_config_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[directors]\ntop_n = \"five\"\n").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
