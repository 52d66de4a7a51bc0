use sqlx::SqlitePool;

use crate::error::{RecipeBotError, Result};
use crate::models::api::{Recipe, RecipeSummary};
use crate::models::{IngredientRecord, RecipeRecord, encode_ingredients};

/// Fields needed to store a new recipe
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<IngredientRecord>,
    pub instructions: Option<String>,
    pub servings: i64,
    pub author_id: i64,
}

/// Fetch a recipe by ID with its ingredients decoded
pub async fn get_recipe(pool: &SqlitePool, recipe_id: i64) -> Result<Recipe> {
    // Fetch the recipe row
    let record = sqlx::query_as::<_, RecipeRecord>(
        "SELECT id, name, ingredients, instructions, servings, author_id, created_at FROM recipes WHERE id = ?",
    )
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RecipeBotError::RecipeNotFound(recipe_id))?;

    // Decode the ingredients column
    Recipe::try_from(record)
}

/// Fetch several recipes in the order given
/// Fails on the first ID that does not exist
pub async fn get_recipes(pool: &SqlitePool, recipe_ids: &[i64]) -> Result<Vec<Recipe>> {
    let mut recipes = Vec::with_capacity(recipe_ids.len());
    for &recipe_id in recipe_ids {
        recipes.push(get_recipe(pool, recipe_id).await?);
    }
    Ok(recipes)
}

/// Store a new recipe
/// Returns the recipe ID
/// Fails with `InvalidArguments` if any quantity is not a finite number
pub async fn create_recipe(pool: &SqlitePool, recipe: &NewRecipe) -> Result<i64> {
    // Non-finite quantities would be stored as JSON null and never decode again
    if let Some(bad) = recipe
        .ingredients
        .iter()
        .find(|ingredient| !ingredient.quantity.is_finite())
    {
        return Err(RecipeBotError::InvalidArguments(format!(
            "quantity for '{}' is not a finite number",
            bad.item
        )));
    }

    // Serialize ingredients for the JSON column
    let ingredients = encode_ingredients(&recipe.ingredients)?;

    // Insert the recipe
    let recipe_id = sqlx::query(
        "INSERT INTO recipes (name, ingredients, instructions, servings, author_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&recipe.name)
    .bind(&ingredients)
    .bind(&recipe.instructions)
    .bind(recipe.servings)
    .bind(recipe.author_id)
    .execute(pool)
    .await?
    .last_insert_rowid();

    tracing::info!(
        recipe_id,
        author_id = recipe.author_id,
        ingredients = recipe.ingredients.len(),
        "Created recipe {}",
        recipe.name
    );

    Ok(recipe_id)
}

/// All recipes ordered by ID
pub async fn list_recipes(pool: &SqlitePool) -> Result<Vec<RecipeSummary>> {
    let recipes =
        sqlx::query_as::<_, RecipeSummary>("SELECT id, name, servings FROM recipes ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(recipes)
}

/// Recipes whose name contains `term`, ignoring ASCII case
pub async fn search_recipes(pool: &SqlitePool, term: &str) -> Result<Vec<RecipeSummary>> {
    // Match anywhere in the name, treating LIKE wildcards in the term literally
    let pattern = format!("%{}%", escape_like(term));

    let recipes = sqlx::query_as::<_, RecipeSummary>(
        "SELECT id, name, servings FROM recipes WHERE name LIKE ? ESCAPE '\\' ORDER BY id",
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(recipes)
}

/// Delete a recipe on behalf of `requester_id`
/// Only the author may delete a recipe unless `privileged` is set
/// Returns the name of the deleted recipe
pub async fn delete_recipe(
    pool: &SqlitePool,
    recipe_id: i64,
    requester_id: i64,
    privileged: bool,
) -> Result<String> {
    // Fetch only the author and name so rows with unreadable ingredients can still go
    let (author_id, name) = sqlx::query_as::<_, (i64, String)>(
        "SELECT author_id, name FROM recipes WHERE id = ?",
    )
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RecipeBotError::RecipeNotFound(recipe_id))?;

    // Check the requester may delete it
    if author_id != requester_id && !privileged {
        tracing::warn!(recipe_id, requester_id, "Refused recipe deletion");
        return Err(RecipeBotError::PermissionDenied { recipe_id });
    }

    // Delete the recipe
    sqlx::query("DELETE FROM recipes WHERE id = ?")
        .bind(recipe_id)
        .execute(pool)
        .await?;

    tracing::info!(recipe_id, requester_id, "Deleted recipe {}", name);

    Ok(name)
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
