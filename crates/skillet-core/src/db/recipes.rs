//! Recipe operations: upsert-based sync, listing, per-day sync checks

use std::collections::HashMap;

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Transaction};
use serde_json::Value;
use tracing::debug;

use super::{ingredients::upsert_ingredient, RecipeStore};
use crate::error::{Error, Result};
use crate::models::RecipeRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl RecipeStore {
    /// Store one recipe.
    ///
    /// The backup copy is written first; the recipe upsert, ingredient
    /// upserts, and link rebuild then run as one transaction, so a failure
    /// anywhere leaves the previously committed state intact.
    pub fn add(&self, recipe: &RecipeRecord) -> Result<()> {
        self.create_backup()?;
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        upsert_recipe(&tx, recipe)?;
        tx.commit()?;
        Ok(())
    }

    /// Store a batch of recipes with a single backup and one transaction.
    ///
    /// The batch is all-or-nothing: a malformed recipe anywhere in the list
    /// rolls the whole call back. Recipes committed by earlier calls are
    /// never lost.
    pub fn add_list(&self, recipes: &[RecipeRecord]) -> Result<()> {
        self.create_backup()?;
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for recipe in recipes {
            upsert_recipe(&tx, recipe)?;
        }
        tx.commit()?;
        debug!(count = recipes.len(), "stored recipe batch");
        Ok(())
    }

    /// All stored recipes, newest date first, ids ascending within a date.
    pub fn list(&self) -> Result<Vec<RecipeRecord>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT date, raw_json FROM recipes ORDER BY date DESC, id ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.iter()
            .map(|(date, raw_json)| row_to_recipe(date, raw_json))
            .collect()
    }

    /// Stored recipes keyed by their identifier.
    pub fn list_by_id(&self) -> Result<HashMap<String, RecipeRecord>> {
        let mut by_id = HashMap::new();
        for recipe in self.list()? {
            by_id.insert(recipe.id()?.to_string(), recipe);
        }
        Ok(by_id)
    }

    /// Look up one recipe; a miss is `None`, not an error.
    pub fn get(&self, recipe_id: &str) -> Result<Option<RecipeRecord>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT date, raw_json FROM recipes WHERE id = ? LIMIT 1",
                params![recipe_id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(date, raw_json)| row_to_recipe(&date, &raw_json))
            .transpose()
    }

    /// True iff no recipe row exists for the given date.
    ///
    /// An indexed LIMIT 1 probe so callers can cheaply skip redundant
    /// upstream fetches.
    pub fn needs_to_be_synced(&self, date: NaiveDate) -> Result<bool> {
        let conn = self.conn()?;
        let row: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM recipes WHERE date = ? LIMIT 1",
                params![date_to_sql(date)],
                |row| row.get(0),
            )
            .optional()?;
        Ok(row.is_none())
    }
}

fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn row_to_recipe(date: &str, raw_json: &str) -> Result<RecipeRecord> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|e| Error::InvalidData(format!("bad date column {date:?}: {e}")))?;
    Ok(RecipeRecord::new(date, serde_json::from_str(raw_json)?))
}

fn upsert_recipe(tx: &Transaction<'_>, recipe: &RecipeRecord) -> Result<()> {
    let recipe_id = recipe.id()?.to_string();
    let raw_json = serde_json::to_string(&recipe.data)?;
    let title = recipe.localized_title();

    tx.execute(
        "INSERT INTO recipes (
            id, date, title_en, title_de, title_es, title_fr, title_pt, raw_json
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            date=excluded.date,
            title_en=excluded.title_en,
            title_de=excluded.title_de,
            title_es=excluded.title_es,
            title_fr=excluded.title_fr,
            title_pt=excluded.title_pt,
            raw_json=excluded.raw_json",
        params![
            recipe_id,
            date_to_sql(recipe.date),
            title.en,
            title.de,
            title.es,
            title.fr,
            title.pt,
            raw_json
        ],
    )?;

    // Links are rebuilt from scratch so stale positions from a previous
    // version of the same recipe never survive a re-sync.
    tx.execute(
        "DELETE FROM recipe_ingredients WHERE recipe_id = ?",
        params![recipe_id],
    )?;

    for (position, entry) in recipe.ingredients().iter().enumerate() {
        let details = entry.get("ingredient").unwrap_or(&Value::Null);
        let ingredient_key = upsert_ingredient(tx, details)?;
        tx.execute(
            "INSERT INTO recipe_ingredients (
                recipe_id, ingredient_key, quantity, measure, position
            ) VALUES (?, ?, ?, ?, ?)",
            params![
                recipe_id,
                ingredient_key,
                entry.get("quantity").and_then(Value::as_f64),
                entry.get("measure").and_then(Value::as_str),
                position as i64
            ],
        )?;
    }

    Ok(())
}
