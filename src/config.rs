use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::ExportArgs;

pub const DEFAULT_OUTPUT: &str = "work_items.csv";
pub const DEFAULT_CLI: &str = "az";

/// Contents of `config.toml`. Every key is optional here; `resolve` checks
/// that the merged result is complete.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub organization_url: Option<String>,
    #[serde(default)]
    pub items: Vec<u64>,
    pub output: Option<PathBuf>,
    pub cli: Option<String>,
}

/// Everything a run needs, after merging the config file with flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub organization_url: String,
    pub items: Vec<u64>,
    pub output: PathBuf,
    pub cli: String,
}

pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".azure-export")
        .join("config.toml")
}

pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: FileConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Merge flags over the file config. Flags win; positional ids replace the
/// configured list rather than extending it.
pub fn resolve(file: FileConfig, args: &ExportArgs) -> Result<ExportConfig> {
    let organization_url = args
        .organization
        .clone()
        .or(file.organization_url)
        .map(|url| url.trim().to_string())
        .unwrap_or_default();
    if organization_url.is_empty() {
        bail!("No organization URL configured. Set organization_url in the config file or pass --organization <url>");
    }

    let items = if args.items.is_empty() {
        file.items
    } else {
        args.items.clone()
    };
    if items.is_empty() {
        bail!("No work items to export. List ids under `items` in the config file or pass them as arguments");
    }

    Ok(ExportConfig {
        organization_url,
        items,
        output: args
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        cli: args
            .cli
            .clone()
            .or(file.cli)
            .unwrap_or_else(|| DEFAULT_CLI.to_string()),
    })
}

pub fn load_config(args: &ExportArgs) -> Result<ExportConfig> {
    let path = args.config.clone().unwrap_or_else(config_path);
    if args.config.is_some() && !path.exists() {
        bail!("Config file {} does not exist", path.display());
    }
    let file = load_file_config(&path)?;
    resolve(file, args)
}
