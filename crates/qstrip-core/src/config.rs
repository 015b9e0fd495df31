use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Display texts used when rendering queries for a host.
///
/// `{count}` in `found_many` and `{name}` in `remove_one` are substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Summary when the URL has no queries.
    pub no_queries: String,
    /// Summary when the URL has exactly one query.
    pub found_one: String,
    /// Summary when the URL has two or more queries.
    pub found_many: String,
    /// Label for an entry whose name is empty (`?&a`, `?=v`).
    pub empty_entry: String,
    /// Label for a named entry.
    pub remove_one: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            no_queries: "No queries".to_string(),
            found_one: "1 query found".to_string(),
            found_many: "{count} queries found".to_string(),
            empty_entry: "(empty)".to_string(),
            remove_one: "{name}".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/qstrip/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QstripConfig {
    #[serde(default)]
    pub labels: Labels,
    /// Default tracing filter when `RUST_LOG` is unset (e.g. "info,qstrip=debug").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qstrip")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QstripConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QstripConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<QstripConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: QstripConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
