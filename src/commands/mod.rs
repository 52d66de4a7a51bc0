//! Chat command layer
//!
//! A transport turns each incoming message into a [`Command`] (see
//! [`Command::parse`]) and calls [`dispatch`] with the identity of the sender.
//! The returned [`Reply`] is rendered back to the chat by the transport.

mod handlers;
mod parse;

pub use handlers::{dispatch, error_reply, recipe_reply};

use crate::reply::Reply;

/// Identity of the user issuing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i64,
    /// Holds the role allowed to delete any recipe
    pub is_privileged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddRecipe {
        name: String,
        ingredients: String,
        instructions: String,
        servings: i64,
    },
    ShowRecipe {
        recipe_id: i64,
    },
    ListRecipes,
    SearchRecipes {
        term: String,
    },
    DeleteRecipe {
        recipe_id: i64,
    },
    ShoppingList {
        recipe_ids: Vec<i64>,
    },
    Help,
}

/// Usage summary shown by the help command
pub fn help_reply(prefix: &str) -> Reply {
    let usage = [
        (
            "addrecipe",
            "name | ingredients (one per line or ';'-separated) | instructions | servings",
        ),
        ("recipe", "<id>"),
        ("recipes", "list every stored recipe"),
        ("search", "<part of a recipe name>"),
        ("deleterecipe", "<id> (author or privileged role only)"),
        ("shoppinglist", "<id> [<id> ...] (up to 7 recipes)"),
        ("help", "show this message"),
    ]
    .iter()
    .map(|(name, args)| format!("{}{} {}", prefix, name, args))
    .collect::<Vec<_>>()
    .join("\n");

    Reply::new("Recipe Bot Commands").field("Usage", &usage)
}
