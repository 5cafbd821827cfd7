use clap::Parser;
use feed_loader::core::ConfigProvider;
use feed_loader::utils::{logger, validation::Validate};
use feed_loader::{
    AsyncFeedLoader, CliConfig, FeedItem, RemoteFeedLoader, ReqwestHttpClient, TomlConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // Initialize logging
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // A config file replaces the source flags
    let result = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => run(&config, cli.json).await,
            Err(e) => Err(e),
        },
        None => run(&cli, cli.json).await,
    };

    // Exit code tells connectivity and invalid data apart
    if let Err(e) = result {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run<C>(config: &C, json: bool) -> feed_loader::Result<()>
where
    C: ConfigProvider + Validate,
{
    // Validate configuration
    config.validate()?;
    let url = url::Url::parse(config.feed_url())?;

    // Create the HTTP client and the loader
    let client = Arc::new(ReqwestHttpClient::from_config(config)?);
    let loader = RemoteFeedLoader::new(url, client);

    // Load once and print
    let items = loader.load_items().await?;
    tracing::info!("✅ Loaded {} feed items from {}", items.len(), loader.url());

    print_items(&items, json)
}

fn print_items(items: &[FeedItem], json: bool) -> feed_loader::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    for item in items {
        println!("{}  {}", item.id, item.image_url);
        if let Some(description) = &item.description {
            println!("    {}", description);
        }
        if let Some(location) = &item.location {
            println!("    📍 {}", location);
        }
    }
    Ok(())
}
