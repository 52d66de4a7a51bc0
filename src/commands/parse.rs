use super::Command;
use crate::controllers::MAX_SHOPPING_LIST_RECIPES;
use crate::error::{RecipeBotError, Result};

impl Command {
    /// Parse a chat message into a command
    ///
    /// Returns `None` when the message does not start with `prefix`, so plain
    /// chatter is ignored rather than reported as an error.
    pub fn parse(message: &str, prefix: &str) -> Option<Result<Command>> {
        let body = message.trim_start().strip_prefix(prefix)?;
        let (name, args) = match body.find(char::is_whitespace) {
            Some(split) => (&body[..split], body[split..].trim()),
            None => (body, ""),
        };

        if name.is_empty() {
            return None;
        }

        Some(match name.to_lowercase().as_str() {
            "addrecipe" => parse_add_recipe(args),
            "recipe" => parse_single_id(args).map(|recipe_id| Command::ShowRecipe { recipe_id }),
            "recipes" => Ok(Command::ListRecipes),
            "search" => parse_search(args),
            "deleterecipe" => {
                parse_single_id(args).map(|recipe_id| Command::DeleteRecipe { recipe_id })
            }
            "shoppinglist" => parse_shopping_list(args),
            "help" => Ok(Command::Help),
            other => Err(RecipeBotError::UnknownCommand(other.to_string())),
        })
    }
}

fn parse_add_recipe(args: &str) -> Result<Command> {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    let [name, ingredients, instructions, servings] = fields.as_slice() else {
        return Err(RecipeBotError::InvalidArguments(format!(
            "addrecipe takes 4 '|'-separated fields (name | ingredients | instructions | servings), got {}",
            fields.len()
        )));
    };

    if name.is_empty() {
        return Err(RecipeBotError::InvalidArguments(
            "recipe name must not be empty".to_string(),
        ));
    }

    let ingredients = ingredients.replace(';', "\n");
    if ingredients.trim().is_empty() {
        return Err(RecipeBotError::InvalidArguments(
            "a recipe needs at least one ingredient".to_string(),
        ));
    }

    let servings = servings
        .parse::<i64>()
        .ok()
        .filter(|servings| *servings > 0)
        .ok_or_else(|| {
            RecipeBotError::InvalidArguments(format!(
                "servings must be a positive whole number, got '{}'",
                servings
            ))
        })?;

    Ok(Command::AddRecipe {
        name: name.to_string(),
        ingredients,
        instructions: instructions.to_string(),
        servings,
    })
}

fn parse_search(args: &str) -> Result<Command> {
    if args.is_empty() {
        return Err(RecipeBotError::InvalidArguments(
            "search needs a term".to_string(),
        ));
    }
    Ok(Command::SearchRecipes {
        term: args.to_string(),
    })
}

fn parse_single_id(args: &str) -> Result<i64> {
    let ids = parse_ids(args)?;
    match ids.as_slice() {
        [recipe_id] => Ok(*recipe_id),
        _ => Err(RecipeBotError::InvalidArguments(format!(
            "expected exactly one recipe ID, got {}",
            ids.len()
        ))),
    }
}

fn parse_shopping_list(args: &str) -> Result<Command> {
    let recipe_ids = parse_ids(args)?;
    if recipe_ids.is_empty() || recipe_ids.len() > MAX_SHOPPING_LIST_RECIPES {
        return Err(RecipeBotError::InvalidArguments(format!(
            "shoppinglist takes between 1 and {} recipe IDs, got {}",
            MAX_SHOPPING_LIST_RECIPES,
            recipe_ids.len()
        )));
    }
    Ok(Command::ShoppingList { recipe_ids })
}

/// IDs separated by whitespace or commas, with an optional leading `#`
fn parse_ids(args: &str) -> Result<Vec<i64>> {
    args.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let digits = token.strip_prefix('#').unwrap_or(token);
            digits.parse::<i64>().map_err(|_| {
                RecipeBotError::InvalidArguments(format!("'{}' is not a recipe ID", token))
            })
        })
        .collect()
}
