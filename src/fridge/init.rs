use crate::api::{FridgeApi, FridgePaths};
use crate::config::FridgeConfig;
use crate::error::{FridgeError, Result};
use crate::presenter::FridgeView;
use crate::store::sqlite::SqliteStore;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the data directory when set.
pub const DATA_DIR_ENV: &str = "FRIDGE_DATA";

pub struct FridgeContext {
    pub view: FridgeView<SqliteStore>,
    pub config: FridgeConfig,
}

/// Resolve the data directory: `$FRIDGE_DATA` first, then the platform default.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "fridge", "fridge")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FridgeError::Config("could not determine a data directory".into()))
}

/// Open the store under `data_dir` and build the view on top of it.
pub fn initialize(data_dir: &Path) -> Result<FridgeContext> {
    let config = FridgeConfig::load(data_dir)?;
    let paths = FridgePaths::new(data_dir);
    let db_path = paths.database_path(&config);

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!(data_dir = %data_dir.display(), db = %db_path.display(), "initializing context");

    let store = SqliteStore::open(&db_path)?;
    let view = FridgeView::new(FridgeApi::new(store, paths))?;

    Ok(FridgeContext { view, config })
}
