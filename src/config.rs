use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_PASSWORD_MIN_LENGTH, PASSWORD_MIN_LENGTH_ENV};
use crate::error::{ErrorContext, RegResult};
use crate::validation::PasswordPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_password_min_length() -> usize {
    DEFAULT_PASSWORD_MIN_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Config {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            log_to_file: false,
        }
    }
}

impl Config {
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(self.password_min_length)
    }

    /// Apply environment overrides on top of the file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(min) = env::var(PASSWORD_MIN_LENGTH_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
        {
            self.password_min_length = min;
        }
        self
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults if it is missing or broken.
pub fn load_config() -> Config {
    config_path()
        .map(|path| load_config_or_default(&path))
        .unwrap_or_default()
        .with_env_overrides()
}

pub fn load_config_or_default(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    load_config_from(path).unwrap_or_default()
}

pub fn load_config_from(path: &Path) -> RegResult<Config> {
    let config_str = fs::read_to_string(path)?;
    let config = serde_json::from_str(&config_str)?;
    Ok(config)
}

pub fn save_config_to(config: &Config, path: &Path) -> RegResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

pub fn save_config(config: &Config) -> RegResult<()> {
    let path = config_path().context("Could not find home directory")?;
    save_config_to(config, &path)
}
