use crate::commands::{seed, CmdMessage, CmdResult, FridgePaths};
use crate::config::FridgeConfig;
use crate::error::Result;
use crate::store::DataStore;
use std::fs;

/// Makes sure the data directory and config exist, then seeds the catalogue
/// unless told not to. The schema itself is created when the store opens.
pub fn run<S: DataStore>(store: &mut S, paths: &FridgePaths, with_seed: bool) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let config = FridgeConfig::load(&paths.data_dir)?;
    config.save(&paths.data_dir)?;

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!(
        "Initialized fridge store at {}",
        paths.data_dir.display()
    )));

    if with_seed {
        let inserted = seed::run(store)?;
        if inserted > 0 {
            result.add_message(CmdMessage::info(format!("Added {} catalogue items", inserted)));
        } else {
            result.add_message(CmdMessage::info("Item catalogue already up to date"));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn creates_config_and_seeds() {
        let temp = TempDir::new().unwrap();
        let paths = FridgePaths::new(temp.path().join("data"));
        let mut store = InMemoryStore::new();

        let res = run(&mut store, &paths, true).unwrap();
        assert!(paths.data_dir.join("config.json").exists());
        assert_eq!(res.messages.len(), 2);
        assert_eq!(
            store.list_items().unwrap().len(),
            seed::DEFAULT_CATALOG.len()
        );

        let again = run(&mut store, &paths, true).unwrap();
        assert!(again.messages[1].content.contains("already up to date"));
    }

    #[test]
    fn can_skip_seeding() {
        let temp = TempDir::new().unwrap();
        let paths = FridgePaths::new(temp.path());
        let mut store = InMemoryStore::new();

        run(&mut store, &paths, false).unwrap();
        assert!(store.list_items().unwrap().is_empty());
    }
}
