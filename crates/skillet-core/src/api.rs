//! Upstream recipe API client
//!
//! Thin pass-through layer: it fetches recipe payloads and pairs each with
//! the calendar date of the fetch. The store only consumes what this client
//! produces; it never calls back into it.

use chrono::Local;
use reqwest::header;
use serde_json::Value;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::RecipeRecord;

/// A recipe identifier accepted by the upstream search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeId {
    /// Internal object id (24-char hex)
    Oid(String),
    /// Sharing-URL identifier
    Uid(String),
}

/// Parse user input into a recipe identifier.
///
/// Accepts a bare 24-character hex object id, or a sharing URL whose last
/// path segment is the uid.
pub fn parse_id(input: &str) -> Option<RecipeId> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        let path = input.split(['?', '#']).next()?;
        let segment = path.trim_end_matches('/').rsplit('/').next()?;
        if segment.is_empty() || segment.starts_with("http") {
            return None;
        }
        return Some(RecipeId::Uid(segment.to_string()));
    }

    if input.len() == 24 && input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Some(RecipeId::Oid(input.to_string()));
    }

    None
}

pub struct RecipeApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl RecipeApiClient {
    /// Build a client from settings; fails with a configuration error when
    /// the API key is not set.
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings.api_key()?.to_string();
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key,
            access_token: settings.access_token.clone(),
        })
    }

    /// Fetch the recipes published for today, stamped with today's date.
    pub async fn list_today(&self) -> Result<Vec<RecipeRecord>> {
        let today = Local::now().date_naive();
        let url = format!(
            "{}/recipes/de/{}?kptnkey={}",
            self.base_url,
            today.format("%Y-%m-%d"),
            self.api_key
        );
        let payloads = self.fetch_json(self.http.get(&url)).await?;
        debug!(count = payloads.len(), "fetched today's recipes");
        Ok(payloads
            .into_iter()
            .map(|data| RecipeRecord::new(today, data))
            .collect())
    }

    /// Fetch full payloads for the given identifiers, stamped with today's
    /// date.
    pub async fn get_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<RecipeRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let today = Local::now().date_naive();
        let body: Vec<Value> = ids
            .iter()
            .map(|id| match id {
                RecipeId::Oid(oid) => serde_json::json!({ "identifier": oid }),
                RecipeId::Uid(uid) => serde_json::json!({ "uid": uid }),
            })
            .collect();
        let url = format!("{}/recipes/search?kptnkey={}", self.base_url, self.api_key);
        let payloads = self.fetch_json(self.http.post(&url).json(&body)).await?;
        Ok(payloads
            .into_iter()
            .map(|data| RecipeRecord::new(today, data))
            .collect())
    }

    /// Identifiers of the authenticated user's favorite recipes. Requires an
    /// access token.
    pub async fn list_favorites(&self) -> Result<Vec<RecipeId>> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(|| Error::Config(format!("{} is not set", crate::config::ACCESS_TOKEN_ENV)))?;
        let url = format!("{}/favorites?kptnkey={}", self.base_url, self.api_key);
        let favorites = self
            .fetch_json(
                self.http
                    .get(&url)
                    .header(header::AUTHORIZATION, format!("Bearer {token}")),
            )
            .await?;
        Ok(favorites
            .iter()
            .filter_map(|fav| fav.get("identifier").and_then(Value::as_str))
            .map(|oid| RecipeId::Oid(oid.to_string()))
            .collect())
    }

    async fn fetch_json(&self, request: reqwest::RequestBuilder) -> Result<Vec<Value>> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("upstream returned {status}")));
        }
        Ok(response.json().await?)
    }
}
