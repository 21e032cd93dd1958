//! Recipe store: SQLite persistence with connection pooling
//!
//! This module is organized by domain:
//! - `recipes` - Recipe upserts, listing, per-day sync checks
//! - `ingredients` - Canonical keys, deduplicated upserts, listing
//!
//! The store exclusively owns its database file and the sibling backup copy;
//! no other component touches these tables directly.

use std::fs;
use std::path::{Path, PathBuf};

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info};

use crate::error::{Error, Result};

mod ingredients;
mod recipes;


pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Default database file name inside the data directory
pub const DEFAULT_DB_NAME: &str = "skillet.db";

/// Where the store keeps its database file.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_dir: PathBuf,
    pub db_name: String,
}

impl StoreConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            db_name: DEFAULT_DB_NAME.to_string(),
        }
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.db_name.is_empty() {
            return Err(Error::Config(
                "database file name must not be empty".to_string(),
            ));
        }
        if self.db_name.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "database file name must not contain path separators: {}",
                self.db_name
            )));
        }
        Ok(())
    }
}

/// Recipe store wrapper with connection pooling
#[derive(Clone)]
pub struct RecipeStore {
    pool: DbPool,
    db_path: PathBuf,
    backup_path: PathBuf,
}

impl RecipeStore {
    /// Open (or create) the store under the configured directory.
    ///
    /// Ensures the directory exists and runs idempotent schema creation, so
    /// this is safe to call on every startup.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.base_dir)?;

        let db_path = config.base_dir.join(&config.db_name);
        let backup_path = config.base_dir.join(format!("{}.backup", config.db_name));

        // Foreign keys are per-connection in SQLite, so enable them in the
        // pool's init hook rather than once at schema creation.
        let manager = SqliteConnectionManager::file(&db_path)
            .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
        let pool = Pool::builder().max_size(10).build(manager)?;

        let store = Self {
            pool,
            db_path,
            backup_path,
        };
        store.run_migrations()?;

        Ok(store)
    }

    /// Path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Path to the backup copy, overwritten on every mutating call
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Get a connection from the pool
    pub(crate) fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Copy the database file aside before a mutating operation.
    ///
    /// A single overwritten copy, not a rotating history. A failed copy aborts
    /// the caller before any write happens.
    pub(crate) fn create_backup(&self) -> Result<()> {
        if !self.db_path.exists() {
            return Ok(());
        }
        fs::copy(&self.db_path, &self.backup_path).map_err(|e| {
            Error::Backup(format!(
                "failed to copy {} to {}: {}",
                self.db_path.display(),
                self.backup_path.display(),
                e
            ))
        })?;
        debug!("backup written to {}", self.backup_path.display());
        Ok(())
    }

    /// Run idempotent schema creation
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Recipes: one row per upstream identifier. Titles are denormalized
            -- for fast listing; raw_json keeps the complete payload verbatim.
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                title_en TEXT,
                title_de TEXT,
                title_es TEXT,
                title_fr TEXT,
                title_pt TEXT,
                raw_json TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_recipes_date ON recipes(date);

            -- Ingredients: stored once under a canonical key and shared by
            -- every recipe that references them.
            CREATE TABLE IF NOT EXISTS ingredients (
                key TEXT PRIMARY KEY,
                typ TEXT,
                category TEXT,
                title_en TEXT,
                title_de TEXT,
                title_es TEXT,
                title_fr TEXT,
                title_pt TEXT,
                number_title_en TEXT,
                number_title_de TEXT,
                number_title_es TEXT,
                number_title_fr TEXT,
                number_title_pt TEXT,
                uncountable_title_en TEXT,
                uncountable_title_de TEXT,
                uncountable_title_es TEXT,
                uncountable_title_fr TEXT,
                uncountable_title_pt TEXT
            );

            -- Join table preserving the exact ingredient order per recipe.
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                recipe_id TEXT NOT NULL,
                ingredient_key TEXT NOT NULL,
                quantity REAL,
                measure TEXT,
                position INTEGER NOT NULL,
                PRIMARY KEY (recipe_id, position),
                FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE,
                FOREIGN KEY (ingredient_key) REFERENCES ingredients(key) ON DELETE CASCADE
            );
            "#,
        )?;

        info!("recipe store schema initialized");
        Ok(())
    }
}
