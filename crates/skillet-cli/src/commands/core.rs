//! Settings loading, store opening, and the init command

use std::path::PathBuf;

use anyhow::{Context, Result};

use skillet_core::{RecipeStore, Settings, StoreConfig};

/// Load settings from the environment, with an optional data directory
/// override from the command line.
pub fn load_settings(data_dir: Option<&PathBuf>) -> Result<Settings> {
    let mut settings = Settings::from_env().context("Failed to load settings")?;
    if let Some(dir) = data_dir {
        settings.root = dir.clone();
        std::fs::create_dir_all(&settings.root)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    }
    Ok(settings)
}

pub fn open_store(settings: &Settings) -> Result<RecipeStore> {
    RecipeStore::open(&StoreConfig::new(&settings.root)).context("Failed to open recipe store")
}

pub fn cmd_init(settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    println!("✅ Recipe store ready at {}", store.path().display());
    Ok(())
}
