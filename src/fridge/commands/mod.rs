use crate::config::FridgeConfig;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod consume;
pub mod find;
pub mod helpers;
pub mod init;
pub mod items;
pub mod remove;
pub mod seed;

#[derive(Debug, Clone)]
pub struct FridgePaths {
    pub data_dir: PathBuf,
}

impl FridgePaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Where the database lives for a given config. Relative names are taken
    /// from the data directory, absolute paths are used as is.
    pub fn database_path(&self, config: &FridgeConfig) -> PathBuf {
        let configured = PathBuf::from(&config.database);
        if configured.is_absolute() {
            configured
        } else {
            self.data_dir.join(configured)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub config: Option<FridgeConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: FridgeConfig) -> Self {
        self.config = Some(config);
        self
    }
}
