//! Item - the single inventory record
//!
//! Items live in one flat table. The store assigns `id` on insert; every
//! other field is mutable through an update matched on `id`.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// An inventory record as stored in the `items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Item {
    /// Store-assigned identifier, immutable once assigned
    #[tabled(rename = "ID")]
    pub id: i64,
    /// Free-form name
    #[tabled(rename = "Name")]
    pub name: String,
    /// Units on hand (may be negative)
    #[tabled(rename = "Quantity")]
    pub quantity: i64,
    /// Unit price (may be negative)
    #[tabled(rename = "Price", display_with = "format_price")]
    pub price: f64,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Render a price with at least one fractional digit (`2.5`, `1.0`, `9.99`).
pub fn format_price(price: &f64) -> String {
    format!("{:?}", price)
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.id,
            self.name,
            self.quantity,
            format_price(&self.price)
        )
    }
}
