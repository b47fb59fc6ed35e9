//! Configuration file support for device-reports.
//!
//! Provides YAML-based configuration through `device-reports.config.yml`
//! files and the merge of file values with command-line options.

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::reporting::services::SortSpec;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "device-reports.config.yml";

/// Inventory file used when neither the CLI nor the config names one
pub const DEFAULT_INVENTORY: &str = "inventory.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub inventory: Option<PathBuf>,
    pub report: Option<String>,
    pub format: Option<String>,
    pub sort: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Warning lines for keys this version does not understand
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    // relative inventory paths are relative to the config file
    if let (Some(inventory), Some(dir)) = (config.inventory.as_mut(), path.parent()) {
        if inventory.is_relative() {
            *inventory = dir.join(&*inventory);
        }
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
///
/// The report key is deliberately not checked: unknown keys fall back to
/// the default report at run time.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let invalid = |message: String| -> anyhow::Error { ReportError::Validation { message }.into() };

    if let Some(ref format) = config.format {
        format.parse::<OutputFormat>().map_err(|e| {
            invalid(format!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'json' or 'markdown'.",
                e
            ))
        })?;
    }
    if let Some(ref sort) = config.sort {
        sort.parse::<SortSpec>().map_err(|e| {
            invalid(format!(
                "Invalid config: sort: {}\n\n💡 Hint: Prefix the column with '-' for descending order (e.g. \"-lastseen\").",
                e
            ))
        })?;
    }
    if let Some(ref inventory) = config.inventory {
        if inventory.as_os_str().is_empty() {
            bail!("Invalid config: inventory must not be empty.");
        }
    }
    Ok(())
}

/// Options given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub inventory: Option<PathBuf>,
    pub report: Option<String>,
    pub format: Option<OutputFormat>,
    pub sort: Option<SortSpec>,
    pub output: Option<PathBuf>,
    pub today: Option<NaiveDate>,
}

/// Options after applying precedence: CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveOptions {
    pub inventory: PathBuf,
    pub report: Option<String>,
    pub format: OutputFormat,
    pub sort: Option<SortSpec>,
    pub output: Option<PathBuf>,
    pub today: Option<NaiveDate>,
}

/// Merge CLI options with an optional config file.
///
/// Config values were validated on load; parse failures here can only come
/// from a hand-built `ConfigFile`.
pub fn merge(cli: CliOptions, config: Option<&ConfigFile>) -> Result<EffectiveOptions> {
    let config_format = config
        .and_then(|c| c.format.as_deref())
        .map(str::parse::<OutputFormat>)
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let config_sort = config
        .and_then(|c| c.sort.as_deref())
        .map(str::parse::<SortSpec>)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    Ok(EffectiveOptions {
        inventory: cli
            .inventory
            .or_else(|| config.and_then(|c| c.inventory.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY)),
        report: cli.report.or_else(|| config.and_then(|c| c.report.clone())),
        format: cli.format.or(config_format).unwrap_or_default(),
        sort: cli.sort.or(config_sort),
        output: cli.output,
        today: cli.today,
    })
}
