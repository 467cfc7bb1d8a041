use crate::domain::error::VerbiError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Dataset file on disk; the bundled dataset is used when unset
    pub dataset: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub paging: bool,
    #[serde(default = "default_pager_command")]
    pub pager_command: String,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            theme: default_theme(),
            paging: false,
            pager_command: default_pager_command(),
            logging: Logging::default(),
        }
    }
}

// Defaults
fn default_pager_command() -> String {
    if cfg!(target_os = "windows") {
        "more".to_string()
    } else {
        "less -RF".to_string()
    }
}
fn default_theme() -> String {
    "classico".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

impl Config {
    /// Configured dataset path, ignoring blank values
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("verbi").join("config.toml"))
}

pub fn load_config() -> Result<Config, VerbiError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Missing file means defaults; a file that does not parse is reported and ignored
pub fn load_config_from(path: &Path) -> Result<Config, VerbiError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file {}: {}. Using defaults.",
                path.display(),
                e
            );
            Ok(Config::default())
        }
    }
}
