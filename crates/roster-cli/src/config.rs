//! CLI configuration file handling.
//!
//! The config file only pins the roster file location. Resolution order
//! for the path is: `--file` flag (or `ROSTER_FILE` env via clap), config
//! file, XDG data default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roster: RosterSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RosterSection {
    pub path: String,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_roster_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("employees.csv"))
}

pub fn read_config(path: &Path) -> anyhow::Result<RosterConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("roster"));
        }
    }
    Ok(home_dir()?.join(".config").join("roster"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("roster"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("roster"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| anyhow::anyhow!("HOME is not set; pass --file or set ROSTER_FILE"))
}
