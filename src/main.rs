use std::sync::Arc;

use imgstudio::{logger, server, Config, FoundryClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(logger::LoggerConfig::development())?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    let port = config.port.unwrap_or(8080);

    log::info!("🔄 Creating Foundry client...");
    let client = match FoundryClient::new(config) {
        Ok(client) => {
            log::info!("✅ Foundry client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Foundry client: {}", e);
            return Err(e.into());
        }
    };

    logger::log_startup_info("imgstudio", env!("CARGO_PKG_VERSION"), port);

    let app = server::router(Arc::new(client));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
