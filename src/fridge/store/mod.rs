//! # Storage Layer
//!
//! This module defines the storage abstraction for fridge. The [`DataStore`] trait
//! is a row-level interface: it reads and writes records and knows nothing about
//! the rules around them (quantity floors, item references). Those live in
//! `commands/`.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage over a single SQLite connection
//!   - Schema in `schema.sql`, applied on open
//!   - Dates stored as `dd/mm/yyyy` text, sections as their canonical name
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same id assignment rules as SQLite (monotonic, never reused)
//!
//! ## Storage Format
//!
//! ```text
//! item(name TEXT PRIMARY KEY, expires INTEGER)
//! grocery(id INTEGER PRIMARY KEY AUTOINCREMENT, item_name TEXT, date TEXT,
//!         quantity INTEGER, section TEXT)
//! ```
//!
//! `grocery.item_name` is a plain reference. A store may hold rows whose item
//! has since gone away; callers decide what to do with them.

use crate::error::Result;
use crate::model::{GroceryRecord, Item, NewGrocery};

pub mod memory;
pub mod sqlite;

/// Abstract interface for fridge storage.
pub trait DataStore {
    /// Look up an item by exact name.
    fn get_item(&self, name: &str) -> Result<Option<Item>>;

    /// All items, in store order.
    fn list_items(&self) -> Result<Vec<Item>>;

    /// Insert an item unless one with the same name exists.
    /// Returns whether a row was written.
    fn insert_item(&mut self, item: &Item) -> Result<bool>;

    /// Look up a grocery row by id, without resolving its item.
    fn get_grocery(&self, id: i64) -> Result<Option<GroceryRecord>>;

    /// All grocery rows, in id order.
    fn list_groceries(&self) -> Result<Vec<GroceryRecord>>;

    /// Insert a grocery and return the id the store assigned to it.
    fn insert_grocery(&mut self, grocery: &NewGrocery) -> Result<i64>;

    /// Take one unit off a grocery, only if more than one is left.
    /// Returns the number of rows changed (0 or 1).
    fn decrement_quantity(&mut self, id: i64) -> Result<usize>;

    /// Delete a grocery. Returns the number of rows removed (0 or 1).
    fn delete_grocery(&mut self, id: i64) -> Result<usize>;
}
