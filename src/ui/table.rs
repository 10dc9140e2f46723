use crate::Item;
use tabled::{settings::Style, Table};

/// Render items as a rounded table. Empty input yields an empty string.
pub fn items_table(items: &[Item]) -> String {
    if items.is_empty() {
        return String::new();
    }

    Table::new(items).with(Style::rounded()).to_string()
}
