use crate::client::LinearClient;
use crate::config::{Config, ListConfig, default_config_path, get_api_key, load_config, save_config};
use crate::constants::LINEAR_API_URL;
use crate::error::{LinearError, LinearResult};
use crate::logging::log_info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    config_path: PathBuf,
    config: Config,
    api_key: Option<String>,
    api_url: String,
    client: Option<Arc<LinearClient>>,
}

impl CliContext {
    /// Load context from the config file, honouring `LINEAR_API_KEY`.
    pub fn load(config_path: Option<PathBuf>) -> LinearResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        let config = load_config(&config_path)?;
        let api_key = get_api_key(&config);

        Ok(Self {
            config_path,
            config,
            api_key,
            api_url: LINEAR_API_URL.to_string(),
            client: None,
        })
    }

    /// Client for a stored token. Fails before any network traffic when there is none.
    pub fn verified_client(&mut self) -> LinearResult<Arc<LinearClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_key = self.api_key()?.to_string();
        let client = Arc::new(LinearClient::with_api_url(&api_key, &self.api_url)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Client for a token that hasn't been saved yet, e.g. during `auth`.
    pub fn client_for_key(&self, api_key: &str) -> LinearResult<LinearClient> {
        LinearClient::with_api_url(api_key, &self.api_url)
    }

    pub fn api_key(&self) -> LinearResult<&str> {
        self.api_key.as_deref().ok_or(LinearError::ApiKeyNotFound)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Saved `list` filters; errors when `list setup` hasn't run.
    pub fn list_settings(&self) -> LinearResult<&ListConfig> {
        self.config.list_settings().ok_or(LinearError::ListNotConfigured)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Set and save a new API key
    pub fn set_api_key(&mut self, api_key: String) -> LinearResult<()> {
        self.config.api_key = Some(api_key.clone());
        self.save()?;
        self.client = Some(Arc::new(LinearClient::with_api_url(&api_key, &self.api_url)?));
        self.api_key = Some(api_key);
        Ok(())
    }

    pub fn set_list_settings(&mut self, list: ListConfig) -> LinearResult<()> {
        self.config.list = Some(list);
        self.save()
    }

    fn save(&self) -> LinearResult<()> {
        save_config(&self.config_path, &self.config)?;
        log_info(&format!("Saved config to {}", self.config_path.display()));
        Ok(())
    }
}

/// Builder pattern for creating CLI contexts with specific configurations.
/// Unlike [`CliContext::load`], it never reads the environment.
pub struct CliContextBuilder {
    api_key: Option<String>,
    config: Option<Config>,
    config_path: Option<PathBuf>,
    api_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            config: None,
            config_path: None,
            api_url: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn build(self) -> LinearResult<CliContext> {
        let config_path = match self.config_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        let config = match self.config {
            Some(config) => config,
            None => load_config(&config_path)?,
        };
        let api_key = self.api_key.or_else(|| config.api_key().map(str::to_string));

        Ok(CliContext {
            config_path,
            config,
            api_key,
            api_url: self.api_url.unwrap_or_else(|| LINEAR_API_URL.to_string()),
            client: None,
        })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
