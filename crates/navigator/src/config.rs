use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{NavigatorError, NavigatorResult};
use crate::session::history::DEFAULT_HISTORY_MAX;

pub const CONFIG_FILENAME: &str = "navigator.json";
pub const CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    pub version: String,
    pub routing: RoutingConfig,
    pub history: HistoryConfig,
    pub links: LinkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Matches must score strictly above this to navigate directly.
    pub confidence_threshold: f64,
    /// Pause between the success notice and navigation.
    pub navigation_delay_ms: u64,
    pub search_path: String,
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub max_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub products_route: String,
    pub fallback_path: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            routing: RoutingConfig {
                confidence_threshold: 0.3,
                navigation_delay_ms: 300,
                search_path: "/search".to_string(),
                max_suggestions: 5,
            },
            history: HistoryConfig {
                max_entries: DEFAULT_HISTORY_MAX,
            },
            links: LinkConfig {
                products_route: "/products".to_string(),
                fallback_path: "/".to_string(),
            },
        }
    }
}

impl RoutingConfig {
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }
}

pub fn load_or_create_config(dir: &Path) -> NavigatorResult<NavigatorConfig> {
    std::fs::create_dir_all(dir).map_err(|error| {
        NavigatorError::Config(format!(
            "failed to create config directory {}: {error}",
            dir.display()
        ))
    })?;

    let path = config_path(dir);
    if !path.exists() {
        let config = NavigatorConfig::default();
        write_config(&path, &config)?;
        tracing::info!(path = %path.display(), "created default navigator config");
        return Ok(config);
    }

    let data = std::fs::read_to_string(&path).map_err(|error| {
        NavigatorError::Config(format!("failed to read config {}: {error}", path.display()))
    })?;
    let config: NavigatorConfig = serde_json::from_str(&data).map_err(|error| {
        NavigatorError::Config(format!("failed to parse config {}: {error}", path.display()))
    })?;

    if config.version != CONFIG_VERSION {
        return Err(NavigatorError::Config(format!(
            "unsupported config version {} (expected {CONFIG_VERSION})",
            config.version
        )));
    }

    Ok(config)
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

fn write_config(path: &Path, config: &NavigatorConfig) -> NavigatorResult<()> {
    let data = serde_json::to_string_pretty(config)?;
    std::fs::write(path, data).map_err(|error| {
        NavigatorError::Config(format!("failed to write config {}: {error}", path.display()))
    })?;
    Ok(())
}
