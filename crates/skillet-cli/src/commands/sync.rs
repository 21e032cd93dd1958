//! Upstream sync commands: sync, search, favorites

use anyhow::{anyhow, Result};

use skillet_core::{parse_id, RecipeApiClient, RecipeStore, Settings};

pub async fn cmd_sync(settings: &Settings, store: &RecipeStore, force: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    if !force && !store.needs_to_be_synced(today)? {
        println!("Already synced for {} (use --force to refetch)", today);
        return Ok(());
    }

    let client = RecipeApiClient::new(settings)?;
    let recipes = client.list_today().await?;
    tracing::debug!("Fetched {} recipes for {}", recipes.len(), today);
    store.add_list(&recipes)?;
    println!("✅ Stored {} recipes for {}", recipes.len(), today);
    Ok(())
}

pub async fn cmd_search(settings: &Settings, store: &RecipeStore, identifier: &str) -> Result<()> {
    let id = parse_id(identifier)
        .ok_or_else(|| anyhow!("Could not parse recipe id: {}", identifier))?;

    let client = RecipeApiClient::new(settings)?;
    let recipes = client.get_by_ids(std::slice::from_ref(&id)).await?;
    if recipes.is_empty() {
        println!("No recipe found for {}", identifier);
        return Ok(());
    }

    store.add_list(&recipes)?;
    for recipe in &recipes {
        println!("✅ Stored recipe {}", recipe.id()?);
    }
    Ok(())
}

pub async fn cmd_favorites(settings: &Settings, store: &RecipeStore) -> Result<()> {
    let client = RecipeApiClient::new(settings)?;
    let favorites = client.list_favorites().await?;
    if favorites.is_empty() {
        println!("No favorites found");
        return Ok(());
    }

    tracing::debug!("Resolving {} favorite ids", favorites.len());
    let recipes = client.get_by_ids(&favorites).await?;
    store.add_list(&recipes)?;
    println!("✅ Stored {} favorite recipes", recipes.len());
    Ok(())
}
