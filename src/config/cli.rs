use crate::config::{validate_source, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "feed-loader")]
#[command(about = "Fetch a remote image feed and print its items")]
pub struct CliConfig {
    #[arg(long, help = "Feed URL to load")]
    pub url: Option<String>,

    #[arg(
        long,
        conflicts_with_all = ["url", "timeout_seconds", "user_agent"],
        help = "TOML configuration file"
    )]
    pub config: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, help = "Print items as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let url = validate_required_field("url", &self.url)?;
        validate_source("url", url, self.timeout_seconds, &self.user_agent)
    }
}
