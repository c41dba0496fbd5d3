//! SQLite-backed storage.
//!
//! [`SqliteStore`] owns the one connection the application uses. It is opened
//! once, handed to the API by value and closed when dropped.

use super::DataStore;
use crate::error::{FridgeError, Result};
use crate::model::{format_date, parse_date, GroceryRecord, Item, NewGrocery, Section};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Schema SQL embedded at compile time.
const SCHEMA_SQL: &str = include_str!("schema.sql");

const GROCERY_COLUMNS: &str = "id, item_name, date, quantity, section";

/// A grocery row exactly as SQLite hands it back.
type RawGrocery = (i64, String, String, i64, String);

pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Opens or creates a database at `path` and makes sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening database");
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )?;
        Self::initialize_connection(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Creates an in-memory database for testing.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_connection(&conn)?;
        Ok(Self { conn, path: None })
    }

    fn initialize_connection(conn: &Connection) -> Result<()> {
        // The bundled build enables foreign keys by default; item references
        // are checked by the commands instead.
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
        conn.execute_batch(SCHEMA_SQL)?;
        debug!("schema ready");
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_grocery(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawGrocery> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }

    fn decode_grocery(raw: RawGrocery) -> Result<GroceryRecord> {
        let (id, item_name, date, quantity, section) = raw;
        let purchase_date = parse_date(&date).map_err(|e| {
            FridgeError::Corrupt(format!("grocery {}: bad date `{}`: {}", id, date, e))
        })?;
        let section = section
            .parse::<Section>()
            .map_err(|e| FridgeError::Corrupt(format!("grocery {}: {}", id, e)))?;

        Ok(GroceryRecord {
            id,
            item_name,
            purchase_date,
            quantity,
            section,
        })
    }
}

impl DataStore for SqliteStore {
    fn get_item(&self, name: &str) -> Result<Option<Item>> {
        let item = self
            .conn
            .query_row(
                "SELECT name, expires FROM item WHERE name = ?1",
                params![name],
                |row| Ok(Item::new(row.get::<_, String>(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(item)
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, expires FROM item ORDER BY rowid")?;
        let items = stmt
            .query_map([], |row| Ok(Item::new(row.get::<_, String>(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    fn insert_item(&mut self, item: &Item) -> Result<bool> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO item (name, expires) VALUES (?1, ?2)",
            params![item.name, item.can_expire],
        )?;
        Ok(changed > 0)
    }

    fn get_grocery(&self, id: i64) -> Result<Option<GroceryRecord>> {
        let raw = self
            .conn
            .query_row(
                &format!("SELECT {} FROM grocery WHERE id = ?1", GROCERY_COLUMNS),
                params![id],
                Self::read_grocery,
            )
            .optional()?;
        raw.map(Self::decode_grocery).transpose()
    }

    fn list_groceries(&self) -> Result<Vec<GroceryRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM grocery ORDER BY id", GROCERY_COLUMNS))?;
        let rows = stmt
            .query_map([], Self::read_grocery)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(Self::decode_grocery).collect()
    }

    fn insert_grocery(&mut self, grocery: &NewGrocery) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO grocery (item_name, date, quantity, section) VALUES (?1, ?2, ?3, ?4)",
            params![
                grocery.item_name,
                format_date(grocery.purchase_date),
                grocery.quantity,
                grocery.section.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, item = %grocery.item_name, "inserted grocery");
        Ok(id)
    }

    fn decrement_quantity(&mut self, id: i64) -> Result<usize> {
        let changed = self.conn.execute(
            "UPDATE grocery SET quantity = quantity - 1 WHERE id = ?1 AND quantity > 1",
            params![id],
        )?;
        debug!(id, changed, "decremented grocery");
        Ok(changed)
    }

    fn delete_grocery(&mut self, id: i64) -> Result<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM grocery WHERE id = ?1", params![id])?;
        debug!(id, changed, "deleted grocery");
        Ok(changed)
    }
}
