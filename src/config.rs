use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the "View All Items" action renders the inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// `<id> - <name> - <quantity> - <price>` per line
    #[default]
    Plain,
    /// Rounded table
    Table,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InventoryConfig {
    pub database: Option<String>,
    pub list_format: Option<ListFormat>,
}

impl InventoryConfig {
    /// Database path from the config, falling back to `inventory.db`
    pub fn database_path(&self) -> PathBuf {
        self.database
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("inventory.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("inventory.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<InventoryConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: InventoryConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &InventoryConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("nope.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.toml");
        let config = InventoryConfig {
            database: Some("data/stock.db".to_string()),
            list_format: Some(ListFormat::Table),
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();

        assert_eq!(loaded.database_path(), PathBuf::from("data/stock.db"));
        assert_eq!(loaded.list_format, Some(ListFormat::Table));
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.toml");
        write_config(&path, &InventoryConfig::default(), false).unwrap();

        assert!(write_config(&path, &InventoryConfig::default(), false).is_err());
        assert!(write_config(&path, &InventoryConfig::default(), true).is_ok());
    }

    #[test]
    fn test_list_format_parses_lowercase() {
        let config: InventoryConfig = toml::from_str("list_format = \"json\"").unwrap();
        assert_eq!(config.list_format, Some(ListFormat::Json));
        assert_eq!(config.database_path(), default_database_path());
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("nested").join("inventory.db");

        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
    }
}
