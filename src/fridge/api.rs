//! # API Facade
//!
//! The API layer is the **data access controller** of fridge: the single entry
//! point for every read and write, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the store**, and with it the one database connection
//! - **Dispatches** to the appropriate command function
//! - **Supplies the clock** (`today`) to commands that stamp dates
//! - **Returns structured types** (`Result<Grocery>`, `Result<Option<Item>>`, ...)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or prompts
//! - **Logging or recovery**: errors go back to the caller untouched
//!
//! ## Generic Over DataStore
//!
//! `FridgeApi<S: DataStore>` is generic over the storage backend:
//! - Production: `FridgeApi<SqliteStore>`
//! - Testing: `FridgeApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{self, Grocery, Item, Section};
use crate::store::DataStore;
use chrono::NaiveDate;

/// The main API facade for fridge operations.
pub struct FridgeApi<S: DataStore> {
    store: S,
    paths: commands::FridgePaths,
    clock: fn() -> NaiveDate,
}

impl<S: DataStore> FridgeApi<S> {
    pub fn new(store: S, paths: commands::FridgePaths) -> Self {
        Self {
            store,
            paths,
            clock: model::today,
        }
    }

    /// Replace the source of "today", for tests and replays.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn find_item(&self, name: &str) -> Result<Option<Item>> {
        commands::items::find(&self.store, name)
    }

    pub fn find_grocery(&self, id: i64) -> Result<Option<Grocery>> {
        commands::find::grocery(&self.store, id)
    }

    pub fn list_items(&self) -> Result<Vec<Item>> {
        commands::items::list(&self.store)
    }

    pub fn list_groceries(&self) -> Result<Vec<Grocery>> {
        commands::find::groceries(&self.store)
    }

    pub fn add_grocery(&mut self, name: &str, quantity: i64, section: Section) -> Result<i64> {
        let today = self.today();
        commands::add::run(&mut self.store, name, quantity, section, today)
    }

    pub fn use_grocery(&mut self, id: i64) -> Result<Grocery> {
        commands::consume::run(&mut self.store, id)
    }

    pub fn remove_grocery(&mut self, id: i64) -> Result<usize> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn seed_catalog(&mut self) -> Result<usize> {
        commands::seed::run(&mut self.store)
    }

    pub fn init(&mut self, with_seed: bool) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths, with_seed)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::FridgePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, FridgePaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::sqlite::SqliteStore;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    fn api() -> FridgeApi<InMemoryStore> {
        let mut api = FridgeApi::new(InMemoryStore::new(), FridgePaths::new("/tmp/unused"))
            .with_clock(fixed_day);
        api.seed_catalog().unwrap();
        api
    }

    #[test]
    fn add_stamps_today() {
        let mut api = api();
        let id = api.add_grocery("Milk", 2, Section::Cooling).unwrap();
        let grocery = api.find_grocery(id).unwrap().unwrap();
        assert_eq!(grocery.purchase_date, fixed_day());
        assert_eq!(grocery.days_ago_label(api.today()), "today");
    }

    #[test]
    fn use_then_remove() {
        let mut api = api();
        let id = api.add_grocery("Eggs", 2, Section::Cooling).unwrap();

        assert_eq!(api.use_grocery(id).unwrap().quantity, 1);
        assert!(api.use_grocery(id).unwrap_err().is_validation());
        assert_eq!(api.remove_grocery(id).unwrap(), 1);
        assert!(api.find_grocery(id).unwrap().is_none());
        assert!(api.remove_grocery(id).unwrap_err().is_not_found());
    }

    #[test]
    fn lists_dispatch_to_store() {
        let mut api = api();
        api.add_grocery("Bacon", 1, Section::Meat).unwrap();
        api.add_grocery("Carrots", 4, Section::Crisper).unwrap();

        assert_eq!(api.list_items().unwrap().len(), commands::seed::DEFAULT_CATALOG.len());
        let groceries = api.list_groceries().unwrap();
        assert_eq!(groceries.len(), 2);
        assert_eq!(groceries[0].item_name(), "Bacon");
        assert!(api.find_item("Bacon").unwrap().is_some());
        assert!(api.find_item("Truffles").unwrap().is_none());
    }

    #[test]
    fn works_over_sqlite() {
        let store = SqliteStore::in_memory().unwrap();
        let mut api = FridgeApi::new(store, FridgePaths::new("/tmp/unused")).with_clock(fixed_day);
        api.seed_catalog().unwrap();

        let id = api.add_grocery("Yoghurt", 3, Section::Cooling).unwrap();
        let used = api.use_grocery(id).unwrap();
        assert_eq!(used.quantity, 2);
        assert_eq!(used.section, Section::Cooling);
        assert_eq!(api.remove_grocery(id).unwrap(), 1);
    }
}
