//! Ingredient listing handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use skillet_core::IngredientRecord;

/// GET /api/ingredients - Deduplicated ingredient rows
///
/// `number_title`/`uncountable_title` are omitted (null) when no language has
/// a value, so the UI can tell "no plural recorded" from an empty string.
pub async fn list_ingredients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IngredientRecord>>, AppError> {
    let ingredients = state.store.list_ingredients()?;
    Ok(Json(ingredients))
}
