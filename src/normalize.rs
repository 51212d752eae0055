use color_eyre::eyre::Result;
use dotenv::dotenv;
use schedule_bag_tool::config::ToolConfig;
use std::io;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ToolConfig::from_env()?;

    // Initialize logging on stderr so stdout carries only JSON
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    schedule_bag_tool::normalize(io::stdin().lock(), io::stdout().lock(), &config)?;

    Ok(())
}
