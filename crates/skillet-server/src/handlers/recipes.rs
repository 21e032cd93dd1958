//! Recipe read handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{AppError, AppState};
use skillet_core::RecipeRecord;

/// GET /api/recipes - All stored recipes, raw payload included
pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecipeRecord>>, AppError> {
    let recipes = state.store.list()?;
    Ok(Json(recipes))
}

/// GET /api/recipes/:id - One recipe, 404 when absent
pub async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RecipeRecord>, AppError> {
    let recipe = state
        .store
        .get(&id)?
        .ok_or_else(|| AppError::not_found("Recipe not found"))?;
    Ok(Json(recipe))
}
