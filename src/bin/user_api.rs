//! User directory service entry point.

use anyhow::Result;
use linkdir::config::UserApiConfig;
use linkdir::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = UserApiConfig::load()?;

    server::init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run_user_api(config).await
}
