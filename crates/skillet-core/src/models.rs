//! Domain models for Skillet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Languages tracked for localized text, in key-derivation priority order.
pub const LANGUAGES: [&str; 5] = ["en", "de", "es", "fr", "pt"];

/// A per-language text field. Each language is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub en: Option<String>,
    pub de: Option<String>,
    pub es: Option<String>,
    pub fr: Option<String>,
    pub pt: Option<String>,
}

impl LocalizedString {
    /// Extract localized values from a JSON object like `{"en": "Tomato", ...}`.
    ///
    /// Missing keys and non-string values become `None`.
    pub fn from_value(value: Option<&Value>) -> Self {
        let get = |lang: &str| {
            value
                .and_then(|v| v.get(lang))
                .and_then(Value::as_str)
                .map(String::from)
        };
        Self {
            en: get("en"),
            de: get("de"),
            es: get("es"),
            fr: get("fr"),
            pt: get("pt"),
        }
    }

    /// Values in language priority order.
    pub fn values(&self) -> [Option<&str>; 5] {
        [
            self.en.as_deref(),
            self.de.as_deref(),
            self.es.as_deref(),
            self.fr.as_deref(),
            self.pt.as_deref(),
        ]
    }

    /// True when every language is either missing or an empty string.
    pub fn is_blank(&self) -> bool {
        self.values().iter().all(|v| v.map_or(true, str::is_empty))
    }
}

/// A stored recipe: the calendar date it was fetched for plus the complete
/// upstream payload, retained verbatim so any field the columns do not model
/// stays recoverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub date: NaiveDate,
    pub data: Value,
}

impl RecipeRecord {
    pub fn new(date: NaiveDate, data: Value) -> Self {
        Self { date, data }
    }

    /// The stable external identifier, embedded in the payload at `_id.$oid`.
    pub fn id(&self) -> Result<&str> {
        self.data
            .pointer("/_id/$oid")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidData("recipe payload is missing _id.$oid".to_string()))
    }

    pub fn localized_title(&self) -> LocalizedString {
        LocalizedString::from_value(self.data.get("localizedTitle"))
    }

    /// The ordered ingredient list, empty when the payload has none.
    pub fn ingredients(&self) -> &[Value] {
        self.data
            .get("ingredients")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A normalized ingredient, stored once and shared by every recipe that
/// references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Canonical key derived from `typ` or a localized title.
    pub key: String,
    pub typ: Option<String>,
    pub category: Option<String>,
    pub localized_title: LocalizedString,
    /// Plural/quantity form; `None` when no language has a value.
    pub number_title: Option<LocalizedString>,
    pub uncountable_title: Option<LocalizedString>,
}
