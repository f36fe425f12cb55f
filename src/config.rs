use serde::{Deserialize, Serialize};

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::messages::Locale;

pub const CONFIG_ENV: &str = "NOTE_SCHEDULER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Config plus the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

fn read_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse config '{}': {e}", path.display()).into())
}

/// Looks for a config file in order: `$NOTE_SCHEDULER_CONFIG`,
/// `config.yaml`, `config.example.yaml`. Falls back to defaults when none
/// exists; a file that exists but does not parse is an error.
pub fn load_config() -> Result<LoadedConfig, Box<dyn std::error::Error>> {
    let env_path = env::var(CONFIG_ENV).ok();
    load_config_from(Path::new(""), env_path.as_deref())
}

/// Same lookup as [`load_config`], with relative candidates resolved
/// against `base`.
pub fn load_config_from(
    base: &Path,
    env_path: Option<&str>,
) -> Result<LoadedConfig, Box<dyn std::error::Error>> {
    // Try env path
    if let Some(env_path) = env_path {
        let path = base.join(env_path);
        if path.exists() {
            return loaded_from(path);
        }
        tracing::warn!(
            "Config file '{}' from {} not found, falling back to 'config.yaml'",
            path.display(),
            CONFIG_ENV
        );
    }

    // Fallback to config.yaml
    let path = base.join("config.yaml");
    if path.exists() {
        return loaded_from(path);
    }

    // Fallback to config.example.yaml
    let path = base.join("config.example.yaml");
    if path.exists() {
        tracing::warn!(
            "'config.yaml' not found, falling back to '{}'",
            path.display()
        );
        return loaded_from(path);
    }

    tracing::info!("No config file found, using defaults");
    Ok(LoadedConfig {
        config: Config::default(),
        source: None,
    })
}

fn loaded_from(path: PathBuf) -> Result<LoadedConfig, Box<dyn std::error::Error>> {
    Ok(LoadedConfig {
        config: read_config(&path)?,
        source: Some(path),
    })
}
