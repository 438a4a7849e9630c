mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration once at startup.
///
/// A `.env` file is honoured, then an optional YAML file (`CONFIG_PATH`, or
/// `config.yaml` when present), then individual environment variables.
pub async fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => from_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => from_file(DEFAULT_CONFIG_PATH).await?,
        Err(_) => Config::default(),
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

pub async fn from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overlays environment values on top of `config`. `lookup` is injected so
/// callers can supply something other than the process environment.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("DEEPSEEK_API_KEY") {
        config.llm.api_key = v;
    }
    if let Some(v) = lookup("DEEPSEEK_BASE_URL") {
        config.llm.base_url = v;
    }
    if let Some(v) = lookup("DEEPSEEK_MODEL") {
        config.llm.model = v;
    }
    if let Some(v) = lookup("WORDPRESS_API_URL") {
        config.wordpress.api_url = v;
    }
    if let Some(v) = lookup("WORDPRESS_API_KEY") {
        config.wordpress.api_key = v;
    }
    if let Some(v) = lookup("SERVER_HOST") {
        config.server.host = v;
    }
    if let Some(v) = lookup("SERVER_PORT") {
        config.server.port = v
            .parse()
            .map_err(|_| Error::config(format!("Invalid SERVER_PORT: '{}'", v)))?;
    }

    Ok(())
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.is_empty() {
            return Err(Error::config("DEEPSEEK_API_KEY is not set"));
        }
        if self.wordpress.api_url.is_empty() {
            return Err(Error::config("WORDPRESS_API_URL is not set"));
        }
        if self.wordpress.api_key.is_empty() {
            return Err(Error::config("WORDPRESS_API_KEY is not set"));
        }
        Ok(())
    }
}
