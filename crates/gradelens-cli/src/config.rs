//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gradelens configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradelensConfig {
    /// Path to the grades CSV.
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default output format for the query commands.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_dataset() -> PathBuf {
    PathBuf::from("data/grades.csv")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./gradelens-results")
}
fn default_format() -> String {
    "table".to_string()
}

impl Default for GradelensConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. The explicit `--config` path (an error if it does not exist)
/// 2. `gradelens.toml` in the current directory
/// 3. `~/.config/gradelens/config.toml`
///
/// The `GRADELENS_DATASET` environment variable overrides the dataset path
/// from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<GradelensConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradelens.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GradelensConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradelensConfig::default(),
    };

    if let Ok(dataset) = std::env::var("GRADELENS_DATASET") {
        config.dataset = PathBuf::from(dataset);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradelens"))
}
