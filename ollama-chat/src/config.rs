use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Connection settings for the Ollama server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the Ollama server (e.g., "http://127.0.0.1:11434")
    #[serde(default = "default_host")]
    pub host: String,

    /// Model name to use when none is given on the command line
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatConfig {
    /// Load configuration
    ///
    /// **Config Priority (highest to lowest):**
    /// 1. `./ollama-chat.toml` (project-level config)
    /// 2. `~/.config/ollama-chat/config.toml` (global user config)
    /// 3. Hardcoded defaults
    ///
    /// A file that exists replaces everything below it; missing fields in
    /// that file fall back to the defaults.
    pub fn load() -> Result<Self> {
        let mut config = ChatConfig::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::info!("Loading global config from: {}", global_path.display());
                config = Self::load_from_file(&global_path)?;
            }
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            tracing::info!("Loading project config from: {}", project_path.display());
            config = Self::load_from_file(&project_path)?;
        }

        tracing::debug!("Final config: model={}, host={}", config.model, config.host);

        Ok(config)
    }

    /// Load config from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("ollama-chat").join("config.toml"))
    }

    fn project_config_path() -> PathBuf {
        PathBuf::from("ollama-chat.toml")
    }
}
