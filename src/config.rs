use clap::Parser;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://recipes.db";
pub const DEFAULT_PREFIX: &str = "!";

/// Runtime settings, read once at startup from flags, the environment, or `.env`
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about = "Recipe storage and shopping list bot", long_about = None)]
pub struct Config {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "RECIPE_BOT_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Prefix that marks a message as a command
    #[arg(long, env = "RECIPE_BOT_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// User ID the console speaks as
    #[arg(long, env = "RECIPE_BOT_USER_ID", default_value_t = 0)]
    pub user_id: i64,

    /// Treat the console user as holding the privileged role
    #[arg(long, env = "RECIPE_BOT_PRIVILEGED")]
    pub privileged: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            prefix: DEFAULT_PREFIX.to_string(),
            user_id: 0,
            privileged: false,
        }
    }
}

impl Config {
    /// Load `.env` if present, then parse flags with environment fallbacks
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }
}
