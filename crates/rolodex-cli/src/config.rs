use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default matches the bundled development server.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

pub const API_URL_ENV: &str = "ROLODEX_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rolodex").join("config.toml"))
    }
}

/// Resolve the API base URL by priority:
/// 1. Explicit `--api-url` flag
/// 2. ROLODEX_API_URL environment variable
/// 3. `api_url` in the config file
/// 4. Built-in default
pub fn resolve_api_url(explicit: Option<&str>) -> Result<String> {
    let from_file = match Config::default_path() {
        Some(path) => Config::load_from(&path)?.api_url,
        None => None,
    };
    Ok(resolve(explicit, std::env::var(API_URL_ENV).ok(), from_file))
}

fn resolve(explicit: Option<&str>, env: Option<String>, file: Option<String>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }
    if let Some(url) = env {
        return url;
    }
    if let Some(url) = file {
        return url;
    }
    DEFAULT_API_URL.to_string()
}
