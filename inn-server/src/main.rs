use inn_server::db::seed;
use inn_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment: .env, working directory, logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    std::fs::create_dir_all(config.log_dir())?;
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        config.log_dir().to_str(),
    );

    print_banner();
    tracing::info!(environment = %config.environment, "Inn server starting...");

    // 2. State: database, migrations, JWT
    let state = ServerState::initialize(config.clone()).await?;

    // 3. Development seed data
    seed::seed_if_empty(&config, &state.db).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
