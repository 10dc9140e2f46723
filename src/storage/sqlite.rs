//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use crate::{Item, Result};
use super::{ItemStore, schema};

/// SQLite-backed item storage.
///
/// Holds only the database path. Each call opens a fresh connection which is
/// dropped (and closed) when the call returns, on error paths included.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the database file and the items table if missing
    pub fn initialize_schema(&self) -> Result<()> {
        let conn = Connection::open(&self.path)?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        tracing::info!("Initialized schema in {}", self.path.display());
        Ok(())
    }

    /// Open a connection to an existing database file.
    ///
    /// No create flag: a missing file is a storage error, not a new empty database.
    fn connect(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&self.path, flags)?;
        tracing::debug!("Opened connection to {}", self.path.display());
        Ok(conn)
    }

    /// Helper to convert a row to an Item
    fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<Item> {
        Ok(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            quantity: row.get(2)?,
            price: row.get(3)?,
        })
    }
}

impl ItemStore for SqliteStore {
    fn add_item(&self, name: &str, quantity: i64, price: f64) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO items (name, quantity, price) VALUES (?1, ?2, ?3)",
            params![name, quantity, price],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "Inserted item");
        Ok(id)
    }

    fn get_all_items(&self) -> Result<Vec<Item>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name, quantity, price FROM items")?;

        let items = stmt
            .query_map([], Self::row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    fn find_item(&self, id: i64) -> Result<Option<Item>> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT id, name, quantity, price FROM items WHERE id = ?1",
            [id],
            Self::row_to_item,
        )
        .optional()
        .map_err(Into::into)
    }

    fn update_item(&self, id: i64, name: &str, quantity: i64, price: f64) -> Result<usize> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "UPDATE items SET name = ?1, quantity = ?2, price = ?3 WHERE id = ?4",
            params![name, quantity, price, id],
        )?;
        tracing::debug!(id, affected, "Updated item");
        Ok(affected)
    }

    fn delete_item(&self, id: i64) -> Result<usize> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM items WHERE id = ?1", [id])?;
        tracing::debug!(id, affected, "Deleted item");
        Ok(affected)
    }
}
