use sqlx::SqlitePool;

use super::get_recipes;
use crate::error::{RecipeBotError, Result};
use crate::ingredients::{ShoppingList, aggregate};
use crate::models::api::Recipe;

/// Most recipes a single shopping list may combine
pub const MAX_SHOPPING_LIST_RECIPES: usize = 7;

/// Build a combined shopping list for the given recipe IDs
/// Returns the recipes used alongside the aggregated list
pub async fn generate_shopping_list(
    pool: &SqlitePool,
    recipe_ids: &[i64],
) -> Result<(Vec<Recipe>, ShoppingList)> {
    if recipe_ids.is_empty() || recipe_ids.len() > MAX_SHOPPING_LIST_RECIPES {
        return Err(RecipeBotError::InvalidArguments(format!(
            "a shopping list needs between 1 and {} recipe IDs, got {}",
            MAX_SHOPPING_LIST_RECIPES,
            recipe_ids.len()
        )));
    }

    let recipes = get_recipes(pool, recipe_ids).await?;

    let shopping_list = aggregate(
        recipes
            .iter()
            .map(|recipe| (recipe.ingredients.as_slice(), recipe.servings)),
    );

    tracing::debug!(
        recipes = recipes.len(),
        entries = shopping_list.len(),
        "Generated shopping list"
    );

    Ok((recipes, shopping_list))
}
