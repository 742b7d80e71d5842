//! URL shortener service entry point.

use anyhow::Result;
use linkdir::config::ShortenerConfig;
use linkdir::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = ShortenerConfig::load()?;

    server::init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run_shortener(config).await
}
