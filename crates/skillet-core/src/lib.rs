//! Skillet Core Library
//!
//! Shared functionality for the Skillet recipe tool:
//! - Recipe store: normalized SQLite persistence with ingredient
//!   deduplication and idempotent upsert-based sync
//! - Upstream recipe API client
//! - Settings loaded from the environment

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use api::{parse_id, RecipeApiClient, RecipeId};
pub use config::Settings;
pub use db::{RecipeStore, StoreConfig, DEFAULT_DB_NAME};
pub use error::{Error, Result};
pub use models::{IngredientRecord, LocalizedString, RecipeRecord};
