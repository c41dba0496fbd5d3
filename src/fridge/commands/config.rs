use crate::commands::{CmdMessage, CmdResult, FridgePaths};
use crate::config::FridgeConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &FridgePaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = FridgeConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = FridgeConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = FridgeConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_then_show() {
        let temp = TempDir::new().unwrap();
        let paths = FridgePaths::new(temp.path());

        let set = run(
            &paths,
            ConfigAction::Set("confirm".into(), "off".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Success);
        assert_eq!(set.messages[0].content, "confirm set to false");

        let shown = run(&paths, ConfigAction::ShowKey("confirm".into())).unwrap();
        assert_eq!(shown.messages[0].content, "false");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert!(!all.config.unwrap().confirm);
    }

    #[test]
    fn bad_set_reports_error_without_saving() {
        let temp = TempDir::new().unwrap();
        let paths = FridgePaths::new(temp.path());

        let res = run(&paths, ConfigAction::Set("shelves".into(), "3".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }
}
