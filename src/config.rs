use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".resdupe.json";

/// Settings-screen naming conventions. Matched case-insensitively as substrings.
pub const DEFAULT_PREF_MARKERS: &[&str] = &[
    "pref_title",
    "pref_summary",
    "_title",
    "_summary",
    "enable_",
    "show_",
    "use_",
    "allow_",
];

/// Short UI labels that are expected to repeat and are never worth consolidating.
pub const DEFAULT_VALUE_STOPLIST: &[&str] =
    &["ok", "cancel", "yes", "no", "save", "delete", "close"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_root_path")]
    pub root_path: String,
    #[serde(default = "default_pref_markers")]
    pub pref_markers: Vec<String>,
    #[serde(default = "default_value_stoplist")]
    pub value_stoplist: Vec<String>,
    #[serde(default = "default_min_value_length")]
    pub min_value_length: usize,
    #[serde(default = "default_max_displayed_value_dups")]
    pub max_displayed_value_dups: usize,
    #[serde(default = "default_max_occurrences_for_display")]
    pub max_occurrences_for_display: usize,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_root_path() -> String {
    "./".to_string()
}

fn default_pref_markers() -> Vec<String> {
    DEFAULT_PREF_MARKERS.iter().map(|s| s.to_string()).collect()
}

fn default_value_stoplist() -> Vec<String> {
    DEFAULT_VALUE_STOPLIST.iter().map(|s| s.to_string()).collect()
}

fn default_min_value_length() -> usize {
    5
}

fn default_max_displayed_value_dups() -> usize {
    50
}

fn default_max_occurrences_for_display() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            pref_markers: default_pref_markers(),
            value_stoplist: default_value_stoplist(),
            min_value_length: default_min_value_length(),
            max_displayed_value_dups: default_max_displayed_value_dups(),
            max_occurrences_for_display: default_max_occurrences_for_display(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load the config from an explicit file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            from_file: true,
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
