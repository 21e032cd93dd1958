//! Sync action handlers: pull from the upstream API into the store

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState};
use skillet_core::{parse_id, Error, RecipeApiClient};

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    /// False when the store already had today's recipes and no fetch ran
    pub synced: bool,
    pub stored: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub identifier: String,
}

/// POST /api/actions/sync-today - Fetch and store today's recipes
///
/// Short-circuits via the store's per-day existence check so repeated clicks
/// don't hit the upstream API.
pub async fn sync_today(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SyncResponse>, AppError> {
    let today = chrono::Local::now().date_naive();
    if !state.store.needs_to_be_synced(today)? {
        return Ok(Json(SyncResponse {
            synced: false,
            stored: 0,
        }));
    }

    let client = api_client(&state)?;
    let recipes = client
        .list_today()
        .await
        .map_err(|e| upstream_error(e, "fetching today's recipes"))?;
    state.store.add_list(&recipes)?;

    info!(count = recipes.len(), date = %today, "synced today's recipes");
    Ok(Json(SyncResponse {
        synced: true,
        stored: recipes.len(),
    }))
}

/// POST /api/actions/search - Fetch one recipe by id or sharing URL
pub async fn search_by_id(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SyncResponse>, AppError> {
    let id = parse_id(&req.identifier)
        .ok_or_else(|| AppError::bad_request("Could not parse recipe id"))?;

    let client = api_client(&state)?;
    let recipes = client
        .get_by_ids(std::slice::from_ref(&id))
        .await
        .map_err(|e| upstream_error(e, "searching recipe"))?;
    if !recipes.is_empty() {
        state.store.add_list(&recipes)?;
    }

    Ok(Json(SyncResponse {
        synced: true,
        stored: recipes.len(),
    }))
}

/// POST /api/actions/backup-favorites - Fetch and store all favorites
pub async fn backup_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SyncResponse>, AppError> {
    let client = api_client(&state)?;
    let favorites = client
        .list_favorites()
        .await
        .map_err(|e| upstream_error(e, "listing favorites"))?;
    let recipes = client
        .get_by_ids(&favorites)
        .await
        .map_err(|e| upstream_error(e, "fetching favorites"))?;
    if !recipes.is_empty() {
        state.store.add_list(&recipes)?;
    }

    info!(count = recipes.len(), "stored favorite recipes");
    Ok(Json(SyncResponse {
        synced: true,
        stored: recipes.len(),
    }))
}

fn api_client(state: &AppState) -> Result<RecipeApiClient, AppError> {
    RecipeApiClient::new(&state.settings).map_err(|e| AppError::bad_request(&e.to_string()))
}

fn upstream_error(err: Error, context: &str) -> AppError {
    match err {
        Error::Config(msg) => AppError::bad_request(&msg),
        Error::Api(msg) => AppError::bad_gateway(&format!("{}: {}", context, msg)),
        Error::Http(e) => AppError::bad_gateway(&format!("{}: {}", context, e)),
        other => other.into(),
    }
}
