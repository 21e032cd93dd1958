//! Read-only output commands: list, show, ingredients

use anyhow::Result;

use skillet_core::RecipeStore;

pub fn cmd_list(store: &RecipeStore) -> Result<()> {
    let recipes = store.list()?;
    if recipes.is_empty() {
        println!("No recipes stored yet. Run `skillet sync` first.");
        return Ok(());
    }

    println!("{} recipes:", recipes.len());
    for recipe in &recipes {
        let title = recipe.localized_title();
        let title = title
            .en
            .as_deref()
            .or(title.de.as_deref())
            .unwrap_or("(untitled)");
        println!("  {}  {}  {}", recipe.date, recipe.id()?, title);
    }
    Ok(())
}

pub fn cmd_show(store: &RecipeStore, id: &str) -> Result<()> {
    match store.get(id)? {
        Some(recipe) => {
            println!("{}", serde_json::to_string_pretty(&recipe.data)?);
            Ok(())
        }
        None => {
            println!("Recipe {} not found", id);
            Ok(())
        }
    }
}

pub fn cmd_ingredients(store: &RecipeStore) -> Result<()> {
    let ingredients = store.list_ingredients()?;
    if ingredients.is_empty() {
        println!("No ingredients stored yet.");
        return Ok(());
    }

    println!("{} ingredients:", ingredients.len());
    for ingredient in &ingredients {
        let title = ingredient
            .localized_title
            .de
            .as_deref()
            .or(ingredient.localized_title.en.as_deref())
            .or(ingredient.typ.as_deref())
            .unwrap_or(ingredient.key.as_str());
        match &ingredient.category {
            Some(category) => println!("  {}  ({})", title, category),
            None => println!("  {}", title),
        }
    }
    Ok(())
}
