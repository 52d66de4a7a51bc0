use recipe_bot::commands::{Caller, Command, dispatch, error_reply};
use recipe_bot::config::Config;
use recipe_bot::db;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Database setup
    let pool = db::connect(&config).await?;
    tracing::info!("Database ready at {}", config.database_url);

    // The console speaks as a single configured user
    let caller = Caller {
        user_id: config.user_id,
        is_privileged: config.privileged,
    };

    println!(
        "Recipe bot ready. Type {}help for commands, Ctrl-D to quit.",
        config.prefix
    );

    // Main loop: one message per line, anything without the prefix is ignored
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line, &config.prefix) else {
            continue;
        };

        let reply = match command {
            Ok(command) => dispatch(&pool, &config, caller, command).await,
            Err(err) => Err(err),
        }
        .unwrap_or_else(|err| error_reply(&err));

        println!("{}", reply);
    }

    // Stdin closed
    pool.close().await;
    Ok(())
}
