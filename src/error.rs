use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeBotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Ingredient serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(i64),

    #[error("Only the author of recipe {recipe_id} or a privileged user can delete it")]
    PermissionDenied { recipe_id: i64 },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, RecipeBotError>;
