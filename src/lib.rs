//! # Inventory - single-user inventory tracker
//!
//! Interactive command-line inventory over a local SQLite table.
//!
//! Inventory provides:
//! - An `Item` record (id, name, quantity, price)
//! - A connection-per-call SQLite storage layer behind the `ItemStore` trait
//! - A menu-driven session loop with injected storage and console I/O
//! - TOML configuration and themed console output

pub mod item;
pub mod storage;
pub mod session;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use item::Item;
pub use storage::{ItemStore, SqliteStore};
pub use session::{MenuChoice, Session};
pub use config::{InventoryConfig, ListFormat};

/// Result type alias for Inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Inventory operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Item with ID {0} not found")]
    NotFound(i64),

    #[error("Invalid {field}: {value:?}")]
    InputParse { field: &'static str, value: String },

    #[error("Input closed while reading {0}")]
    InputClosed(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the session loop reports this error and keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let storage = Error::Storage(rusqlite::Error::InvalidQuery);
        assert!(storage.is_recoverable());

        let parse = Error::InputParse { field: "quantity", value: "ten".to_string() };
        assert!(!parse.is_recoverable());
        assert_eq!(parse.to_string(), "Invalid quantity: \"ten\"");

        assert!(!Error::InputClosed("price").is_recoverable());
        assert!(!Error::NotFound(7).is_recoverable());
    }
}
