//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - items(id, name, quantity, price)
//!
//! Every operation opens its own connection and drops it before returning.

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::{Item, Result};

/// The four CRUD operations the session loop needs, plus an id lookup.
///
/// All values reach the database as bound parameters.
pub trait ItemStore {
    /// Insert a new row and return the id the store assigned.
    fn add_item(&self, name: &str, quantity: i64, price: f64) -> Result<i64>;

    /// Every row in the store's natural order.
    fn get_all_items(&self) -> Result<Vec<Item>>;

    /// Look up a single row by id.
    fn find_item(&self, id: i64) -> Result<Option<Item>>;

    /// Overwrite the row matching `id`. Returns the affected-row count, zero if absent.
    fn update_item(&self, id: i64, name: &str, quantity: i64, price: f64) -> Result<usize>;

    /// Remove the row matching `id`. Returns the affected-row count, zero if absent.
    fn delete_item(&self, id: i64) -> Result<usize>;
}

impl<T: ItemStore + ?Sized> ItemStore for &T {
    fn add_item(&self, name: &str, quantity: i64, price: f64) -> Result<i64> {
        (**self).add_item(name, quantity, price)
    }

    fn get_all_items(&self) -> Result<Vec<Item>> {
        (**self).get_all_items()
    }

    fn find_item(&self, id: i64) -> Result<Option<Item>> {
        (**self).find_item(id)
    }

    fn update_item(&self, id: i64, name: &str, quantity: i64, price: f64) -> Result<usize> {
        (**self).update_item(id, name, quantity, price)
    }

    fn delete_item(&self, id: i64) -> Result<usize> {
        (**self).delete_item(id)
    }
}
