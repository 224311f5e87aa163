use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, APP_NAME, CONFIG_FILE};
use crate::error::{LinearError, LinearResult};
use crate::filtering::AssigneeFilter;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListConfig>,
}

/// Filter selections saved by `list setup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    pub team_id: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub assignee_filter: AssigneeFilter,
    #[serde(default)]
    pub state_ids: Vec<String>,
}

impl Config {
    /// Stored token, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Saved list filters; `None` until `list setup` has run.
    pub fn list_settings(&self) -> Option<&ListConfig> {
        self.list.as_ref().filter(|list| !list.team_id.is_empty())
    }
}

pub fn default_config_path() -> LinearResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| LinearError::ConfigError("Could not find config directory".to_string()))?;
    Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
}

pub fn load_config(path: &Path) -> LinearResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path).map_err(|e| {
        LinearError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&config_str).map_err(|e| {
        LinearError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
    })
}

pub fn save_config(path: &Path, config: &Config) -> LinearResult<()> {
    if let Some(parent) = path.parent() {
        create_private_dir(parent)?;
    }

    let config_str = serde_yaml::to_string(config)?;
    fs::write(path, config_str)?;
    restrict_permissions(path)?;

    Ok(())
}

/// Token from the environment, falling back to the config file.
pub fn get_api_key(config: &Config) -> Option<String> {
    if let Ok(key) = env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            return Some(key.trim().to_string());
        }
    }

    config.api_key().map(str::to_string)
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> LinearResult<()> {
    use std::os::unix::fs::DirBuilderExt;

    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> LinearResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> LinearResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> LinearResult<()> {
    Ok(())
}
