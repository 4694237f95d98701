use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default lifetime of a status message
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 3000;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_message_timeout_ms() -> u64 {
    DEFAULT_MESSAGE_TIMEOUT_MS
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: default_message_timeout_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.message_timeout_ms)
    }
}

/// Load config from config.json, defaults if the file doesn't exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

/// Write a default config.json unless one is already there.
/// Returns whether a file was written.
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    save_config(path, &AppConfig::default())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let config = load_config(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.message_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = AppConfig {
            message_timeout_ms: 1500,
            log_filter: "debug".to_string(),
        };
        save_config(&path, &config).unwrap();

        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"message_timeout_ms": 500}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.message_timeout_ms, 500);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_init_config_keeps_existing_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        assert!(init_config(&path).unwrap());
        assert_eq!(load_config(&path).unwrap(), AppConfig::default());

        let custom = AppConfig {
            message_timeout_ms: 800,
            log_filter: "debug".to_string(),
        };
        save_config(&path, &custom).unwrap();

        assert!(!init_config(&path).unwrap());
        assert_eq!(load_config(&path).unwrap(), custom);
    }
}
