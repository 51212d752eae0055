use color_eyre::eyre::Result;
use dotenv::dotenv;
use schedule_bag_tool::config::ToolConfig;
use std::io;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ToolConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Generating {}", schedule_bag_core::contract::TYPE_NAME);
    schedule_bag_tool::generate(io::stdout().lock(), &config)?;

    Ok(())
}
