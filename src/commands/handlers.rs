use sqlx::SqlitePool;

use super::{Caller, Command, help_reply};
use crate::config::Config;
use crate::controllers::{
    NewRecipe, create_recipe, delete_recipe, generate_shopping_list, get_recipe, list_recipes,
    search_recipes,
};
use crate::error::{RecipeBotError, Result};
use crate::ingredients::parse;
use crate::models::api::{Recipe, RecipeSummary, ShoppingListLine};
use crate::reply::Reply;

/// Run one command on behalf of `caller`
pub async fn dispatch(
    pool: &SqlitePool,
    config: &Config,
    caller: Caller,
    command: Command,
) -> Result<Reply> {
    tracing::debug!(user_id = caller.user_id, ?command, "Dispatching command");

    match command {
        Command::AddRecipe {
            name,
            ingredients,
            instructions,
            servings,
        } => add_recipe(pool, caller, name, &ingredients, instructions, servings).await,
        Command::ShowRecipe { recipe_id } => {
            let recipe = get_recipe(pool, recipe_id).await?;
            Ok(recipe_reply(&recipe))
        }
        Command::ListRecipes => {
            let recipes = list_recipes(pool).await?;
            Ok(summary_reply("Recipes", "No recipes stored yet.", &recipes))
        }
        Command::SearchRecipes { term } => {
            let recipes = search_recipes(pool, &term).await?;
            Ok(summary_reply(
                &format!("Recipes matching '{}'", term),
                "No recipes matched.",
                &recipes,
            ))
        }
        Command::DeleteRecipe { recipe_id } => {
            let name =
                delete_recipe(pool, recipe_id, caller.user_id, caller.is_privileged).await?;
            Ok(Reply::new("Recipe Deleted")
                .description(format!("Deleted recipe #{} {}", recipe_id, name)))
        }
        Command::ShoppingList { recipe_ids } => {
            let (recipes, shopping_list) = generate_shopping_list(pool, &recipe_ids).await?;

            // Name the recipes used, then list the items sorted by key
            let for_recipes = recipes
                .iter()
                .map(|recipe| format!("#{} {}", recipe.id, recipe.name))
                .collect::<Vec<_>>()
                .join(", ");
            let items = ShoppingListLine::from_shopping_list(&shopping_list)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");

            Ok(Reply::new("Shopping List")
                .description(format!("For {}", for_recipes))
                .field("Items", &items))
        }
        Command::Help => Ok(help_reply(&config.prefix)),
    }
}

async fn add_recipe(
    pool: &SqlitePool,
    caller: Caller,
    name: String,
    ingredients: &str,
    instructions: String,
    servings: i64,
) -> Result<Reply> {
    // Parse the ingredient text into records
    let recipe = NewRecipe {
        name,
        ingredients: parse(ingredients),
        instructions: if instructions.is_empty() {
            None
        } else {
            Some(instructions)
        },
        servings,
        author_id: caller.user_id,
    };

    // Store it under the caller's ID
    let recipe_id = create_recipe(pool, &recipe).await?;

    Ok(Reply::new("Recipe Added")
        .description(format!(
            "Saved {} as recipe #{} with {} ingredients",
            recipe.name,
            recipe_id,
            recipe.ingredients.len()
        ))
        .footer(format!("added by {}", caller.user_id)))
}

/// Full view of a single recipe
pub fn recipe_reply(recipe: &Recipe) -> Reply {
    let mut reply = Reply::new(&recipe.name)
        .description(format!("Serves {}", recipe.servings))
        .field("Ingredients", &recipe.ingredient_lines());

    if let Some(instructions) = &recipe.instructions {
        reply = reply.field("Instructions", instructions);
    }

    reply.footer(format!(
        "Recipe #{} added by {} on {}",
        recipe.id, recipe.author_id, recipe.created_at
    ))
}

fn summary_reply(title: &str, empty: &str, recipes: &[RecipeSummary]) -> Reply {
    if recipes.is_empty() {
        return Reply::new(title).description(empty);
    }

    let lines = recipes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    Reply::new(title).field("Recipes", &lines)
}

/// User-facing reply for a failed command
///
/// Storage failures are logged and reported generically.
pub fn error_reply(err: &RecipeBotError) -> Reply {
    match err {
        RecipeBotError::Database(_)
        | RecipeBotError::Migration(_)
        | RecipeBotError::Serialization(_) => {
            tracing::error!("Command failed: {}", err);
            Reply::new("Error")
                .description("Something went wrong while talking to the recipe store.")
        }
        _ => {
            tracing::info!("Command rejected: {}", err);
            Reply::new("Error").description(err.to_string())
        }
    }
}
