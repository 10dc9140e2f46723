//! Interactive Session Loop
//!
//! A single `Menu` state with five transitions (add, list, update, delete,
//! exit). Storage, input and output are injected so the loop can run against
//! an in-memory store and byte buffers.
//!
//! Storage failures are reported and the menu is shown again. Malformed
//! numeric input ends the session with `Error::InputParse`.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::ListFormat;
use crate::storage::ItemStore;
use crate::ui;
use crate::{Error, Result};

/// Menu entries, keyed `1` to `5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the operator's menu selection. Anything but `1`..`5` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::List => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Item",
            MenuChoice::List => "View All Items",
            MenuChoice::Update => "Update Item",
            MenuChoice::Delete => "Delete Item",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Add,
            MenuChoice::List,
            MenuChoice::Update,
            MenuChoice::Delete,
            MenuChoice::Exit,
        ]
    }
}

/// The menu-driven control loop.
pub struct Session<S, R, W> {
    store: S,
    input: R,
    out: W,
    list_format: ListFormat,
}

impl<S: ItemStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(store: S, input: R, out: W) -> Self {
        Self {
            store,
            input,
            out,
            list_format: ListFormat::default(),
        }
    }

    pub fn with_list_format(mut self, list_format: ListFormat) -> Self {
        self.list_format = list_format;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until Exit is chosen or input ends at the menu prompt.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Session started");
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("Input closed at menu, ending session");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                tracing::debug!(input = %line, "Unrecognized menu choice");
                ui::warn(&mut self.out, "Invalid choice. Please try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                writeln!(self.out, "Exiting...")?;
                self.out.flush()?;
                tracing::info!("Session ended");
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(Error::NotFound(id)) => {
                    ui::warn(&mut self.out, &format!("Item with ID {} not found.", id))?;
                }
                Err(e) if e.is_recoverable() => {
                    tracing::error!(error = %e, "{} failed", choice.label());
                    ui::error(&mut self.out, &format!("{} failed: {}", choice.label(), e))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::List => self.list(),
            MenuChoice::Update => self.update(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        ui::header(&mut self.out, "Inventory Management System")?;
        for choice in MenuChoice::all() {
            ui::menu_line(&mut self.out, choice.key(), choice.label())?;
        }
        ui::prompt(&mut self.out, "Enter your choice: ")?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let name = self.prompt_line("Enter item name: ", "item name")?;
        let quantity: i64 = self.prompt_parse("Enter quantity: ", "quantity")?;
        let price: f64 = self.prompt_parse("Enter price: ", "price")?;

        let id = self.store.add_item(&name, quantity, price)?;
        tracing::info!(id, "Item added");
        ui::success(&mut self.out, "Item added successfully.")?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let items = self.store.get_all_items()?;

        ui::header(&mut self.out, "Items in Inventory:")?;
        match self.list_format {
            ListFormat::Plain => {
                for item in &items {
                    writeln!(self.out, "{}", item)?;
                }
            }
            ListFormat::Table => {
                if !items.is_empty() {
                    writeln!(self.out, "{}", ui::items_table(&items))?;
                }
            }
            ListFormat::Json => {
                writeln!(self.out, "{}", serde_json::to_string_pretty(&items)?)?;
            }
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let id: i64 = self.prompt_parse("Enter item ID to update: ", "item ID")?;
        let item = self.store.find_item(id)?.ok_or(Error::NotFound(id))?;

        let quantity: i64 = self.prompt_parse("Enter new quantity: ", "quantity")?;
        let price: f64 = self.prompt_parse("Enter new price: ", "price")?;

        let affected = self.store.update_item(item.id, &item.name, quantity, price)?;
        tracing::info!(id, affected, "Item updated");
        ui::success(&mut self.out, "Item updated successfully.")?;
        Ok(())
    }

    /// Always reports success, even when no row matched.
    fn delete(&mut self) -> Result<()> {
        let id: i64 = self.prompt_parse("Enter item ID to delete: ", "item ID")?;

        let affected = self.store.delete_item(id)?;
        if affected == 0 {
            tracing::debug!(id, "Delete matched no rows");
        }
        ui::success(&mut self.out, "Item deleted successfully.")?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(len);
        Ok(Some(buf))
    }

    fn prompt_line(&mut self, label: &str, field: &'static str) -> Result<String> {
        ui::prompt(&mut self.out, label)?;
        self.read_line()?.ok_or(Error::InputClosed(field))
    }

    fn prompt_parse<T: FromStr>(&mut self, label: &str, field: &'static str) -> Result<T> {
        let raw = self.prompt_line(label, field)?;
        match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(Error::InputParse { field, value: raw }),
        }
    }
}
