//! CLI configuration.
//!
//! Loaded from `essaylens.toml` in the working directory, then
//! `~/.config/essaylens/config.toml`, with an `ESSAYLENS_DATA_DIR`
//! environment override for the data directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level essaylens configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssaylensConfig {
    /// Where essays and the analytics counter are stored.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Goal applied when none is given.
    #[serde(default = "default_goal")]
    pub default_goal: String,
    /// Max concurrent essays in batch runs.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
    /// Directory for generated reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./essaylens-data")
}
fn default_goal() -> String {
    "general".to_string()
}
fn default_parallelism() -> usize {
    4
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./essaylens-reports")
}

impl Default for EssaylensConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_goal: default_goal(),
            parallelism: default_parallelism(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<EssaylensConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("essaylens.toml");
        if local.exists() {
            Some(local)
        } else if let Some(global_dir) = global_config_dir() {
            let global = global_dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<EssaylensConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => EssaylensConfig::default(),
    };

    if let Ok(dir) = std::env::var("ESSAYLENS_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn global_config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("essaylens"))
}
