//! Inventory CLI - interactive inventory tracker over a local SQLite file

use clap::{Parser, Subcommand};
use inventory::config::{self, InventoryConfig, ListFormat};
use inventory::ui::{self, Icons};
use inventory::{Session, SqliteStore};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "inventory")]
#[command(version)]
#[command(about = "Single-user inventory tracker - add, list, update and delete items")]
#[command(long_about = r#"
Runs an interactive menu over the `items` table of a local SQLite file.

Example usage:
  inventory init
  inventory
  inventory --database stock.db --format table
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (defaults to the config value, then inventory.db)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// How "View All Items" renders the inventory
    #[arg(short, long, value_enum)]
    format: Option<ListFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the items table and a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let loaded = config::load_config(Some(&config_path))?;
    let cfg = loaded.clone().unwrap_or_default();
    let database = cli.database.clone().unwrap_or_else(|| cfg.database_path());

    match cli.command {
        Some(Commands::Init { force }) => {
            tracing::info!("Initializing {:?}", database);
            config::ensure_db_dir(&database)?;
            SqliteStore::new(&database).initialize_schema()?;

            let mut stdout = std::io::stdout();
            ui::success(&mut stdout, &format!("{} Database ready: {}", Icons::DATABASE, database.display()))?;

            if loaded.is_none() || force {
                let written = InventoryConfig {
                    database: Some(database.display().to_string()),
                    list_format: Some(cli.format.or(cfg.list_format).unwrap_or_default()),
                };
                config::write_config(&config_path, &written, force)?;
                ui::success(&mut stdout, &format!("{} Config written: {}", Icons::PACKAGE, config_path.display()))?;
            } else {
                ui::warn(&mut stdout, &format!("Config exists at {}, leaving it (use --force to overwrite)", config_path.display()))?;
            }
        }

        None => {
            let list_format = cli.format.or(cfg.list_format).unwrap_or_default();
            tracing::info!("Opening session on {:?} (format: {:?})", database, list_format);

            let store = SqliteStore::new(database);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = Session::new(store, stdin.lock(), stdout.lock())
                .with_list_format(list_format);
            session.run()?;
        }
    }

    Ok(())
}
