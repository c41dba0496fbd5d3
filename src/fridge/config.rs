use crate::error::{FridgeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATABASE: &str = "fridge.db";

/// Configuration for fridge, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FridgeConfig {
    /// Database file name (relative to the data dir) or absolute path
    #[serde(default = "default_database")]
    pub database: String,

    /// Ask before adding or removing groceries
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_confirm() -> bool {
    true
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            confirm: default_confirm(),
        }
    }
}

impl FridgeConfig {
    pub const KEYS: [&'static str; 2] = ["database", "confirm"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FridgeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "database" => Some(self.database.clone()),
            "confirm" => Some(self.confirm.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(FridgeError::Config("database cannot be empty".into()));
                }
                self.database = value.to_string();
            }
            "confirm" => {
                self.confirm = parse_bool(value).ok_or_else(|| {
                    FridgeError::Config(format!("confirm expects true or false, got `{}`", value))
                })?;
            }
            other => {
                return Err(FridgeError::Config(format!(
                    "unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FridgeConfig::default();
        assert_eq!(config.database, "fridge.db");
        assert!(config.confirm);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = FridgeConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, FridgeConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = FridgeConfig::default();
        config.set("database", "kitchen.db").unwrap();
        config.set("confirm", "no").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = FridgeConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.database, "kitchen.db");
        assert!(!loaded.confirm);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"confirm": false}"#).unwrap();

        let loaded = FridgeConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.database, "fridge.db");
        assert!(!loaded.confirm);
    }

    #[test]
    fn test_get_and_set_reject_bad_input() {
        let mut config = FridgeConfig::default();
        assert_eq!(config.get("confirm").as_deref(), Some("true"));
        assert!(config.get("colour").is_none());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("confirm", "maybe").is_err());
        assert!(config.set("database", "  ").is_err());
        assert_eq!(config, FridgeConfig::default());
    }
}
