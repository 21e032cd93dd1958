//! Ingredient normalization: canonical keys, deduplicated upserts, listing

use rusqlite::{params, Transaction};
use serde_json::Value;

use super::RecipeStore;
use crate::error::{Error, Result};
use crate::models::{IngredientRecord, LocalizedString, LANGUAGES};

/// Derive the canonical key used to deduplicate ingredients across recipes.
///
/// `typ` wins when present and non-empty. Otherwise the first non-empty
/// localized title in language priority order is lower-cased with whitespace
/// runs collapsed to underscores. The fallback has no collision detection
/// across languages; it is kept exactly as-is for compatibility with
/// existing stored data.
pub(crate) fn canonical_ingredient_key(details: &Value) -> Result<String> {
    if let Some(typ) = details.get("typ").and_then(Value::as_str) {
        if !typ.is_empty() {
            return Ok(typ.to_string());
        }
    }

    if let Some(localized) = details.get("localizedTitle") {
        for lang in LANGUAGES {
            if let Some(title) = localized.get(lang).and_then(Value::as_str) {
                if !title.is_empty() {
                    let lowered = title.to_lowercase();
                    return Ok(lowered.split_whitespace().collect::<Vec<_>>().join("_"));
                }
            }
        }
    }

    Err(Error::MalformedIngredient(
        "ingredient is missing both typ and localizedTitle".to_string(),
    ))
}

/// Insert or fully replace the canonical row for an ingredient, returning
/// its key.
pub(super) fn upsert_ingredient(tx: &Transaction<'_>, details: &Value) -> Result<String> {
    let key = canonical_ingredient_key(details)?;
    let title = LocalizedString::from_value(details.get("localizedTitle"));
    let number_title = LocalizedString::from_value(details.get("numberTitle"));
    let uncountable_title = LocalizedString::from_value(details.get("uncountableTitle"));

    tx.execute(
        "INSERT INTO ingredients (
            key, typ, category,
            title_en, title_de, title_es, title_fr, title_pt,
            number_title_en, number_title_de, number_title_es, number_title_fr, number_title_pt,
            uncountable_title_en, uncountable_title_de, uncountable_title_es, uncountable_title_fr, uncountable_title_pt
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET
            typ=excluded.typ,
            category=excluded.category,
            title_en=excluded.title_en,
            title_de=excluded.title_de,
            title_es=excluded.title_es,
            title_fr=excluded.title_fr,
            title_pt=excluded.title_pt,
            number_title_en=excluded.number_title_en,
            number_title_de=excluded.number_title_de,
            number_title_es=excluded.number_title_es,
            number_title_fr=excluded.number_title_fr,
            number_title_pt=excluded.number_title_pt,
            uncountable_title_en=excluded.uncountable_title_en,
            uncountable_title_de=excluded.uncountable_title_de,
            uncountable_title_es=excluded.uncountable_title_es,
            uncountable_title_fr=excluded.uncountable_title_fr,
            uncountable_title_pt=excluded.uncountable_title_pt",
        params![
            key,
            details.get("typ").and_then(Value::as_str),
            details.get("category").and_then(Value::as_str),
            title.en,
            title.de,
            title.es,
            title.fr,
            title.pt,
            number_title.en,
            number_title.de,
            number_title.es,
            number_title.fr,
            number_title.pt,
            uncountable_title.en,
            uncountable_title.de,
            uncountable_title.es,
            uncountable_title.fr,
            uncountable_title.pt,
        ],
    )?;

    Ok(key)
}

impl RecipeStore {
    /// All ingredient rows, sorted by German title, then English, then type
    /// code.
    pub fn list_ingredients(&self) -> Result<Vec<IngredientRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT key, typ, category,
                    title_en, title_de, title_es, title_fr, title_pt,
                    number_title_en, number_title_de, number_title_es, number_title_fr, number_title_pt,
                    uncountable_title_en, uncountable_title_de, uncountable_title_es, uncountable_title_fr, uncountable_title_pt
             FROM ingredients
             ORDER BY COALESCE(title_de, title_en, typ) ASC",
        )?;

        let ingredients = stmt
            .query_map([], |row| {
                Ok(IngredientRecord {
                    key: row.get(0)?,
                    typ: row.get(1)?,
                    category: row.get(2)?,
                    localized_title: LocalizedString {
                        en: row.get(3)?,
                        de: row.get(4)?,
                        es: row.get(5)?,
                        fr: row.get(6)?,
                        pt: row.get(7)?,
                    },
                    number_title: blank_to_none(LocalizedString {
                        en: row.get(8)?,
                        de: row.get(9)?,
                        es: row.get(10)?,
                        fr: row.get(11)?,
                        pt: row.get(12)?,
                    }),
                    uncountable_title: blank_to_none(LocalizedString {
                        en: row.get(13)?,
                        de: row.get(14)?,
                        es: row.get(15)?,
                        fr: row.get(16)?,
                        pt: row.get(17)?,
                    }),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }
}

/// Collapse an all-blank localized mapping to `None` so callers can tell "no
/// plural form recorded" apart from a mapping that happens to hold values.
fn blank_to_none(title: LocalizedString) -> Option<LocalizedString> {
    if title.is_blank() {
        None
    } else {
        Some(title)
    }
}
